use async_trait::async_trait;
use customer_core_api::{domain::{CustomerPatch, NewCustomer}, error::CustomerResult};
use uuid::Uuid;

use crate::models::customer::{CustomerFilter, CustomerModel};
use crate::repository::pagination::{Page, PageRequest};

/// Storage contract for customers.
///
/// Implementations translate store failures into the `CustomerError`
/// taxonomy at the point of detection; raw driver errors never cross this
/// boundary. Soft-deleted customers are invisible to every operation.
///
/// Implementations normalize their input (`NewCustomer::normalized`,
/// `CustomerPatch::normalized`) before writing, so raw caller values are
/// stored the same way whether or not a service normalized them first.
///
/// # Example
/// ```ignore
/// impl CustomerRepository for PgCustomerRepository {
///     async fn get(&self, id: Uuid) -> CustomerResult<CustomerModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a customer together with its sentinel verification in one transaction
    ///
    /// # Arguments
    /// * `customer` - Already validated input; the email is lower-cased before insert
    ///
    /// # Returns
    /// * `Ok(CustomerModel)` - The persisted row with a fresh id and store timestamps
    /// * `Err(CustomerError::Conflict)` - The `(email, phone)` pair belongs to a live customer
    async fn create(&self, customer: NewCustomer) -> CustomerResult<CustomerModel>;

    /// Load a live customer
    ///
    /// # Returns
    /// * `Err(CustomerError::NotFound)` - No live row matches, whether it never existed or was deleted
    async fn get(&self, id: Uuid) -> CustomerResult<CustomerModel>;

    /// List live customers, most recently created first
    ///
    /// # Arguments
    /// * `filter` - Optional restriction on verification status
    /// * `page` - Limit and offset to apply
    ///
    /// # Returns
    /// * `Ok(Page)` - The requested slice and the total count matching `filter`
    async fn list(
        &self,
        filter: CustomerFilter,
        page: PageRequest,
    ) -> CustomerResult<Page<CustomerModel>>;

    /// Apply a sparse update, touching only the provided fields plus `updated_at`
    ///
    /// An empty patch is a read and returns the same result as `get`.
    ///
    /// # Returns
    /// * `Err(CustomerError::NotFound)` - No live row matches
    /// * `Err(CustomerError::Conflict)` - The new values collide with another live customer
    async fn update(&self, id: Uuid, patch: CustomerPatch) -> CustomerResult<CustomerModel>;

    /// Mark a live customer as deleted
    ///
    /// The customer's verification loses its PAN and returns to `NOT_FOUND`
    /// in the same write, so the PAN can be registered again.
    ///
    /// # Returns
    /// * `Err(CustomerError::NotFound)` - The write affected no live row
    async fn soft_delete(&self, id: Uuid) -> CustomerResult<()>;
}
