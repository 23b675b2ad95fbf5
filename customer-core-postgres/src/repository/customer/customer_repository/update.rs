use customer_core_api::domain::CustomerPatch;
use customer_core_api::error::{CustomerError, CustomerResult};
use customer_core_db::models::customer::CustomerModel;
use tracing::debug;
use uuid::Uuid;

use crate::error::translate;
use crate::utils::TryFromRow;

use super::patch::build_update;
use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &CustomerRepositoryImpl,
        id: Uuid,
        patch: CustomerPatch,
    ) -> CustomerResult<CustomerModel> {
        let patch = patch.normalized();
        let Some(mut builder) = build_update(id, &patch) else {
            return Self::get_impl(repo, id).await;
        };

        let row = builder
            .build()
            .fetch_optional(&*repo.pool)
            .await
            .map_err(translate)?
            .ok_or(CustomerError::NotFound)?;

        debug!(customer_id = %id, "customer updated");
        CustomerModel::try_from_row(&row)
    }
}
