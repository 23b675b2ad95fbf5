use thiserror::Error;

/// Field-level validation failures raised by the customer and verification validators.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid name")]
    InvalidName,

    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid phone")]
    InvalidPhone,

    #[error("invalid verification status")]
    InvalidStatus,

    #[error("invalid PAN number")]
    InvalidPanNumber,
}

impl ValidationError {
    /// Name of the input field the failure refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidName => "name",
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidPhone => "phone",
            ValidationError::InvalidStatus => "status",
            ValidationError::InvalidPanNumber => "pan_number",
        }
    }
}

/// Which uniqueness rule a rejected write collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictTarget {
    /// The `(email, phone)` pair already belongs to a live customer
    ContactDetails,
    /// The PAN is already registered to another customer
    PanNumber,
}

impl std::fmt::Display for ConflictTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictTarget::ContactDetails => write!(f, "email or phone already exists"),
            ConflictTarget::PanNumber => write!(f, "PAN already exists"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Conflict: {0}")]
    Conflict(ConflictTarget),

    #[error("Customer not found")]
    NotFound,

    #[error("Verification not found")]
    VerificationNotFound,

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CustomerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CustomerError::Validation(_))
    }

    /// Only transport-level store failures may succeed when repeated.
    /// Nothing in this crate retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CustomerError::StorageUnavailable(_))
    }

    /// The validation failure carried by this error, if any
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            CustomerError::Validation(err) => Some(*err),
            _ => None,
        }
    }
}

pub type CustomerResult<T> = Result<T, CustomerError>;
