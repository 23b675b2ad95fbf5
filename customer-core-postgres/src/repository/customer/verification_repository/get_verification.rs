use customer_core_api::error::{CustomerError, CustomerResult};
use customer_core_db::models::verification::VerificationModel;
use uuid::Uuid;

use crate::error::translate;
use crate::utils::TryFromRow;

use super::repo_impl::VerificationRepositoryImpl;

impl VerificationRepositoryImpl {
    pub(super) async fn get_verification_impl(
        repo: &VerificationRepositoryImpl,
        customer_id: Uuid,
    ) -> CustomerResult<VerificationModel> {
        let row = sqlx::query(
            r#"
            SELECT v.id, v.customer_id, v.pan_number, v.status, v.created_at, v.updated_at
            FROM verifications v
            JOIN customers c ON c.id = v.customer_id
            WHERE v.customer_id = $1 AND c.deleted_at IS NULL
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&*repo.pool)
        .await
        .map_err(translate)?
        .ok_or(CustomerError::VerificationNotFound)?;

        VerificationModel::try_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use customer_core_api::error::CustomerError;
    use customer_core_db::repository::verification::VerificationRepository;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    #[serial_test::serial]
    async fn test_get_verification_unknown_customer() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let verification_repo = &ctx.repos().verification_repository;

        let err = verification_repo
            .get_verification_by_customer_id(Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err, CustomerError::VerificationNotFound);

        Ok(())
    }
}
