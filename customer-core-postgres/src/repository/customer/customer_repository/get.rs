use customer_core_api::error::{CustomerError, CustomerResult};
use customer_core_db::models::customer::CustomerModel;
use uuid::Uuid;

use crate::error::translate;
use crate::utils::TryFromRow;

use super::repo_impl::{CustomerRepositoryImpl, CUSTOMER_COLUMNS};

impl CustomerRepositoryImpl {
    pub(super) async fn get_impl(
        repo: &CustomerRepositoryImpl,
        id: Uuid,
    ) -> CustomerResult<CustomerModel> {
        let query = format!(
            r#"
            SELECT {CUSTOMER_COLUMNS}
            FROM customers c
            LEFT JOIN verifications v ON v.customer_id = c.id
            WHERE c.id = $1 AND c.deleted_at IS NULL
            "#
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await
            .map_err(translate)?
            .ok_or(CustomerError::NotFound)?;

        CustomerModel::try_from_row(&row)
    }
}
