use serde::{Deserialize, Serialize};

/// Longest accepted name, in bytes
pub const NAME_MAX_LEN: usize = 100;
/// Longest accepted email address, in bytes
pub const EMAIL_MAX_LEN: usize = 254;
/// Longest accepted phone number, in bytes
pub const PHONE_MAX_LEN: usize = 32;

/// Input for registering a new customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Trimmed copy with the email lower-cased, ready for persistence
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
        }
    }
}

/// Sparse update of a customer.
///
/// `None` leaves the stored value untouched. A blank `name` is a present value
/// and is rejected by validation; blank `email`/`phone` mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Drops blank email/phone, trims every present value and lower-cases the email
    pub fn normalized(self) -> Self {
        let present = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            name: self.name.map(|v| v.trim().to_string()),
            email: present(self.email).map(|v| v.to_lowercase()),
            phone: present(self.phone),
        }
    }
}
