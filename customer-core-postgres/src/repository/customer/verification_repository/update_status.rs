use customer_core_api::domain::VerificationStatus;
use customer_core_api::error::{CustomerError, CustomerResult};
use tracing::debug;
use uuid::Uuid;

use crate::error::translate;

use super::repo_impl::VerificationRepositoryImpl;

impl VerificationRepositoryImpl {
    pub(super) async fn update_status_impl(
        repo: &VerificationRepositoryImpl,
        customer_id: Uuid,
        status: VerificationStatus,
    ) -> CustomerResult<()> {
        let mut tx = repo.pool.begin().await.map_err(translate)?;

        // Lock the verification so the document check and the write see the same PAN
        let pan_number: Option<String> = sqlx::query_scalar(
            r#"
            SELECT v.pan_number
            FROM verifications v
            JOIN customers c ON c.id = v.customer_id
            WHERE v.customer_id = $1 AND c.deleted_at IS NULL
            FOR UPDATE OF v
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(translate)?
        .ok_or(CustomerError::VerificationNotFound)?;

        let has_document = pan_number.is_some_and(|pan| !pan.trim().is_empty());
        if status.requires_document() && !has_document {
            return Err(CustomerError::PreconditionFailed(format!(
                "PAN number is required before moving to {status}"
            )));
        }

        sqlx::query(
            r#"
            UPDATE verifications
            SET status = $2, updated_at = now()
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .bind(status)
        .execute(&mut *tx)
        .await
        .map_err(translate)?;

        tx.commit().await.map_err(translate)?;

        debug!(customer_id = %customer_id, status = %status, "verification status updated");
        Ok(())
    }
}
