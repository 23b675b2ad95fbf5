use customer_core_api::error::{CustomerError, CustomerResult};
use customer_core_db::models::verification::{NewVerification, VerificationModel};
use tracing::debug;

use crate::error::translate;
use crate::utils::TryFromRow;

use super::repo_impl::VerificationRepositoryImpl;

impl VerificationRepositoryImpl {
    /// Upserts on `customer_id`: a resubmitted document replaces the previous
    /// one and resets the status. Yields no row when the customer is not live.
    pub(super) async fn create_verification_impl(
        repo: &VerificationRepositoryImpl,
        verification: NewVerification,
    ) -> CustomerResult<VerificationModel> {
        let row = sqlx::query(
            r#"
            INSERT INTO verifications (customer_id, pan_number, status)
            SELECT c.id, $2, $3
            FROM customers c
            WHERE c.id = $1 AND c.deleted_at IS NULL
            ON CONFLICT (customer_id) DO UPDATE
            SET pan_number = EXCLUDED.pan_number,
                status = EXCLUDED.status,
                updated_at = now()
            RETURNING id, customer_id, pan_number, status, created_at, updated_at
            "#,
        )
        .bind(verification.customer_id)
        .bind(&verification.pan_number)
        .bind(verification.status)
        .fetch_optional(&*repo.pool)
        .await
        .map_err(translate)?
        .ok_or(CustomerError::NotFound)?;

        debug!(customer_id = %verification.customer_id, status = %verification.status, "verification stored");
        VerificationModel::try_from_row(&row)
    }
}
