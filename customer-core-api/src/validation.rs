//! Field rules for customer create and update.
//!
//! Validators are pure: they read the input and report the first failing
//! field in `name`, `email`, `phone` order.

use phonenumber::country;
use validator::ValidateEmail;

use crate::domain::{CustomerPatch, NewCustomer, EMAIL_MAX_LEN, NAME_MAX_LEN, PHONE_MAX_LEN};
use crate::error::ValidationError;

/// Region-dependent settings for contact validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRules {
    /// Region used to interpret phone numbers written without a country code
    pub default_region: country::Id,
}

impl ContactRules {
    pub fn new(default_region: country::Id) -> Self {
        Self { default_region }
    }
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            default_region: country::Id::IN,
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() || name.len() > NAME_MAX_LEN {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() || email.len() > EMAIL_MAX_LEN || !email.validate_email() {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_phone(phone: &str, rules: &ContactRules) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if phone.is_empty() || phone.len() > PHONE_MAX_LEN {
        return Err(ValidationError::InvalidPhone);
    }
    match phonenumber::parse(Some(rules.default_region), phone) {
        Ok(number) if phonenumber::is_valid(&number) => Ok(()),
        _ => Err(ValidationError::InvalidPhone),
    }
}

impl NewCustomer {
    /// Every field is required on create
    pub fn validate_for_create(&self, rules: &ContactRules) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone, rules)?;
        Ok(())
    }
}

impl CustomerPatch {
    /// Every field is optional on update. A present name must not be blank,
    /// present email and phone are checked only when non-empty.
    pub fn validate_for_update(&self, rules: &ContactRules) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validate_email(email)?;
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            validate_phone(phone, rules)?;
        }
        Ok(())
    }
}
