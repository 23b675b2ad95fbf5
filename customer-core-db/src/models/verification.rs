use chrono::{DateTime, Utc};
use customer_core_api::domain::{VerificationStatus, PAN_LEN};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database model for the PAN verification linked one-to-one to a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationModel {
    pub id: Uuid,
    /// References CustomerModel.id
    pub customer_id: Uuid,
    /// None until a document has been supplied
    pub pan_number: Option<HeaplessString<PAN_LEN>>,
    pub status: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VerificationModel {
    pub fn has_document(&self) -> bool {
        self.pan_number
            .as_ref()
            .is_some_and(|pan| !pan.trim().is_empty())
    }
}

/// A document submission for a customer's verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVerification {
    pub customer_id: Uuid,
    /// Already normalized PAN
    pub pan_number: String,
    pub status: VerificationStatus,
}
