use customer_core_api::error::{CustomerError, CustomerResult};
use tracing::debug;
use uuid::Uuid;

use crate::error::translate;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn soft_delete_impl(
        repo: &CustomerRepositoryImpl,
        id: Uuid,
    ) -> CustomerResult<()> {
        let mut tx = repo.pool.begin().await.map_err(translate)?;

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET deleted_at = now(), updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::NotFound);
        }

        // A deleted customer releases its PAN, like its contact details
        sqlx::query(
            r#"
            UPDATE verifications
            SET pan_number = NULL, status = 'NOT_FOUND', updated_at = now()
            WHERE customer_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;

        debug!(customer_id = %id, "customer soft-deleted");
        Ok(())
    }
}
