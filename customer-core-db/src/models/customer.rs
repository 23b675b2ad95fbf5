use chrono::{DateTime, Utc};
use customer_core_api::domain::{VerificationStatus, PAN_LEN};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database model for a live customer.
///
/// `pan_number` and `status` are denormalized from the customer's
/// verification record. Soft-deleted rows are never materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerModel {
    #[serde(rename = "customer_id")]
    pub id: Uuid,
    pub name: HeaplessString<100>,
    /// Always stored lower-case
    pub email: HeaplessString<254>,
    pub phone: HeaplessString<32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<HeaplessString<PAN_LEN>>,
    pub status: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Restricts a customer listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// Only customers whose verification is in this status
    pub status: Option<VerificationStatus>,
}

impl CustomerFilter {
    pub fn with_status(status: VerificationStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn matches(&self, customer: &CustomerModel) -> bool {
        self.status.map_or(true, |status| customer.status == status)
    }
}
