use async_trait::async_trait;
use customer_core_api::domain::VerificationStatus;
use customer_core_api::error::CustomerResult;
use customer_core_db::models::verification::{NewVerification, VerificationModel};
use customer_core_db::repository::verification::VerificationRepository;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::translate;
use crate::utils::{get_optional_heapless_string, TryFromRow};

pub struct VerificationRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl VerificationRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for VerificationModel {
    fn try_from_row(row: &PgRow) -> CustomerResult<Self> {
        Ok(VerificationModel {
            id: row.try_get("id").map_err(translate)?,
            customer_id: row.try_get("customer_id").map_err(translate)?,
            pan_number: get_optional_heapless_string(row, "pan_number")?,
            status: row.try_get("status").map_err(translate)?,
            created_at: row.try_get("created_at").map_err(translate)?,
            updated_at: row.try_get("updated_at").map_err(translate)?,
        })
    }
}

#[async_trait]
impl VerificationRepository for VerificationRepositoryImpl {
    async fn create_verification(
        &self,
        verification: NewVerification,
    ) -> CustomerResult<VerificationModel> {
        Self::create_verification_impl(self, verification).await
    }

    async fn get_verification_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> CustomerResult<VerificationModel> {
        Self::get_verification_impl(self, customer_id).await
    }

    async fn update_verification_status(
        &self,
        customer_id: Uuid,
        status: VerificationStatus,
    ) -> CustomerResult<()> {
        Self::update_status_impl(self, customer_id, status).await
    }
}
