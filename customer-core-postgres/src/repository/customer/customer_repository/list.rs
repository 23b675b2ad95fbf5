use customer_core_api::error::CustomerResult;
use customer_core_db::models::customer::{CustomerFilter, CustomerModel};
use customer_core_db::repository::pagination::{Page, PageRequest};
use sqlx::Row;
use tracing::debug;

use crate::error::translate;
use crate::utils::{to_sql_bound, TryFromRow};

use super::repo_impl::{CustomerRepositoryImpl, CUSTOMER_COLUMNS};

const STATUS_PREDICATE: &str = r#"
    c.deleted_at IS NULL
    AND ($1::verification_status IS NULL
         OR COALESCE(v.status, 'NOT_FOUND'::verification_status) = $1)
"#;

impl CustomerRepositoryImpl {
    pub(super) async fn list_impl(
        repo: &CustomerRepositoryImpl,
        filter: CustomerFilter,
        page: PageRequest,
    ) -> CustomerResult<Page<CustomerModel>> {
        // Count and page must observe the same snapshot
        let mut tx = repo.pool.begin().await.map_err(translate)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(translate)?;

        let count_query = format!(
            r#"
            SELECT COUNT(*) AS total
            FROM customers c
            LEFT JOIN verifications v ON v.customer_id = c.id
            WHERE {STATUS_PREDICATE}
            "#
        );
        let total: i64 = sqlx::query(&count_query)
            .bind(filter.status)
            .fetch_one(&mut *tx)
            .await
            .map_err(translate)?
            .try_get("total")
            .map_err(translate)?;

        let page_query = format!(
            r#"
            SELECT {CUSTOMER_COLUMNS}
            FROM customers c
            LEFT JOIN verifications v ON v.customer_id = c.id
            WHERE {STATUS_PREDICATE}
            ORDER BY c.created_at DESC, c.id DESC
            LIMIT $2 OFFSET $3
            "#
        );
        let rows = sqlx::query(&page_query)
            .bind(filter.status)
            .bind(to_sql_bound(page.limit))
            .bind(to_sql_bound(page.offset))
            .fetch_all(&mut *tx)
            .await
            .map_err(translate)?;

        tx.commit().await.map_err(translate)?;

        let items = rows
            .iter()
            .map(CustomerModel::try_from_row)
            .collect::<CustomerResult<Vec<_>>>()?;

        debug!(
            total,
            returned = items.len(),
            limit = page.limit,
            offset = page.offset,
            "customers listed"
        );
        Ok(Page::new(items, usize::try_from(total).unwrap_or(0), page.limit, page.offset))
    }
}
