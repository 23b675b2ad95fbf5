use async_trait::async_trait;
use customer_core_api::{domain::VerificationStatus, error::CustomerResult};
use uuid::Uuid;

use crate::models::verification::{NewVerification, VerificationModel};

/// Storage contract for the verification record owned by each customer
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Record a document for a live customer's verification
    ///
    /// # Arguments
    /// * `verification` - Customer id, normalized PAN and the status to store
    ///
    /// # Returns
    /// * `Ok(VerificationModel)` - The stored verification
    /// * `Err(CustomerError::NotFound)` - The customer does not exist or is deleted
    /// * `Err(CustomerError::Conflict)` - The PAN is registered to another customer
    async fn create_verification(
        &self,
        verification: NewVerification,
    ) -> CustomerResult<VerificationModel>;

    /// Load the verification of a live customer
    ///
    /// # Returns
    /// * `Err(CustomerError::VerificationNotFound)` - No verification for a live customer
    async fn get_verification_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> CustomerResult<VerificationModel>;

    /// Move a verification to `status` and refresh `updated_at`
    ///
    /// Does not return the row; callers re-read it with
    /// `get_verification_by_customer_id`.
    ///
    /// # Returns
    /// * `Err(CustomerError::VerificationNotFound)` - No verification for a live customer
    /// * `Err(CustomerError::PreconditionFailed)` - `status` needs a PAN and none is on record
    async fn update_verification_status(
        &self,
        customer_id: Uuid,
        status: VerificationStatus,
    ) -> CustomerResult<()>;
}
