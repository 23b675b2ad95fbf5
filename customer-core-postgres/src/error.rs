//! Translation of `sqlx` failures into the customer error taxonomy.
//!
//! This is the only place that inspects driver errors. Everything above the
//! repository sees `CustomerError`.

use customer_core_api::error::{ConflictTarget, CustomerError};
use tracing::debug;

pub(crate) const CONTACT_DETAILS_CONSTRAINT: &str = "customers_email_phone_live_key";
pub(crate) const PAN_NUMBER_CONSTRAINT: &str = "verifications_pan_number_key";

/// Map a unique constraint name to the rule it enforces
pub(crate) fn conflict_target(constraint: Option<&str>) -> Option<ConflictTarget> {
    match constraint? {
        CONTACT_DETAILS_CONSTRAINT => Some(ConflictTarget::ContactDetails),
        PAN_NUMBER_CONSTRAINT => Some(ConflictTarget::PanNumber),
        _ => None,
    }
}

pub(crate) fn translate(err: sqlx::Error) -> CustomerError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            match conflict_target(db_err.constraint()) {
                Some(target) => {
                    debug!(constraint = ?db_err.constraint(), "unique violation translated to conflict");
                    CustomerError::Conflict(target)
                }
                None => CustomerError::Internal(format!(
                    "unexpected unique violation on {}",
                    db_err.constraint().unwrap_or("unknown constraint")
                )),
            }
        }
        sqlx::Error::Database(db_err) => CustomerError::Internal(db_err.message().to_string()),
        sqlx::Error::RowNotFound => CustomerError::NotFound,
        sqlx::Error::Configuration(source) => CustomerError::InvalidArgument(source.to_string()),
        err @ (sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::WorkerCrashed) => CustomerError::StorageUnavailable(err.to_string()),
        other => CustomerError::Internal(other.to_string()),
    }
}
