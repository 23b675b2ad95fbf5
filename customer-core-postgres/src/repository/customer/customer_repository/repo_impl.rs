use async_trait::async_trait;
use customer_core_api::domain::{CustomerPatch, NewCustomer};
use customer_core_api::error::CustomerResult;
use customer_core_db::models::customer::{CustomerFilter, CustomerModel};
use customer_core_db::repository::customer::CustomerRepository;
use customer_core_db::repository::pagination::{Page, PageRequest};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::translate;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

/// Columns every customer read returns, with the verification denormalized.
/// Expects `customers` aliased as `c` and `verifications` as `v`.
pub(super) const CUSTOMER_COLUMNS: &str = r#"
    c.id, c.name, c.email, c.phone,
    v.pan_number,
    COALESCE(v.status, 'NOT_FOUND'::verification_status) AS status,
    c.created_at, c.updated_at
"#;

pub struct CustomerRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl CustomerRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for CustomerModel {
    fn try_from_row(row: &PgRow) -> CustomerResult<Self> {
        Ok(CustomerModel {
            id: row.try_get("id").map_err(translate)?,
            name: get_heapless_string(row, "name")?,
            email: get_heapless_string(row, "email")?,
            phone: get_heapless_string(row, "phone")?,
            pan_number: get_optional_heapless_string(row, "pan_number")?,
            status: row.try_get("status").map_err(translate)?,
            created_at: row.try_get("created_at").map_err(translate)?,
            updated_at: row.try_get("updated_at").map_err(translate)?,
        })
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn create(&self, customer: NewCustomer) -> CustomerResult<CustomerModel> {
        Self::create_impl(self, customer).await
    }

    async fn get(&self, id: Uuid) -> CustomerResult<CustomerModel> {
        Self::get_impl(self, id).await
    }

    async fn list(
        &self,
        filter: CustomerFilter,
        page: PageRequest,
    ) -> CustomerResult<Page<CustomerModel>> {
        Self::list_impl(self, filter, page).await
    }

    async fn update(&self, id: Uuid, patch: CustomerPatch) -> CustomerResult<CustomerModel> {
        Self::update_impl(self, id, patch).await
    }

    async fn soft_delete(&self, id: Uuid) -> CustomerResult<()> {
        Self::soft_delete_impl(self, id).await
    }
}
