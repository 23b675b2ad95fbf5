//! Customer and verification orchestration.
//!
//! The service validates and normalizes caller input, parses identifiers and
//! status literals, clamps paging, and delegates to the repositories. It
//! holds no mutable state between calls.

use customer_core_api::domain::{normalize_pan, CustomerPatch, NewCustomer, VerificationStatus};
use customer_core_api::error::{CustomerError, CustomerResult};
use customer_core_api::validation::ContactRules;
use customer_core_db::models::customer::{CustomerFilter, CustomerModel};
use customer_core_db::models::verification::{NewVerification, VerificationModel};
use customer_core_db::repository::customer::CustomerRepository;
use customer_core_db::repository::pagination::{Page, PageRequest};
use customer_core_db::repository::verification::VerificationRepository;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
    verifications: Arc<dyn VerificationRepository>,
    rules: ContactRules,
}

impl CustomerService {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        verifications: Arc<dyn VerificationRepository>,
        rules: ContactRules,
    ) -> Self {
        Self {
            customers,
            verifications,
            rules,
        }
    }

    pub async fn create(&self, customer: NewCustomer) -> CustomerResult<CustomerModel> {
        info!("create customer invoked");
        let customer = customer.normalized();
        if let Err(err) = customer.validate_for_create(&self.rules) {
            warn!(field = err.field(), "create customer validation failed");
            return Err(err.into());
        }

        let created = self
            .customers
            .create(customer)
            .await
            .inspect_err(|err| log_failure("create customer", None, err))?;

        info!(customer_id = %created.id, "create customer succeeded");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> CustomerResult<CustomerModel> {
        info!(customer_id = id, "get customer invoked");
        let id = parse_id(id)?;

        let customer = self
            .customers
            .get(id)
            .await
            .inspect_err(|err| log_failure("get customer", Some(id), err))?;

        debug!(customer_id = %customer.id, "get customer succeeded");
        Ok(customer)
    }

    /// Paging never fails: see [`PageRequest::clamped`]. A blank `status`
    /// means no filter.
    pub async fn list(
        &self,
        page: i64,
        limit: i64,
        status: Option<&str>,
    ) -> CustomerResult<Page<CustomerModel>> {
        info!(page, limit, status, "list customers invoked");
        let request = PageRequest::clamped(page, limit);

        let filter = match status.map(str::trim).filter(|s| !s.is_empty()) {
            None => CustomerFilter::default(),
            Some(raw) => match raw.parse::<VerificationStatus>() {
                Ok(status) => CustomerFilter::with_status(status),
                Err(err) => {
                    warn!(status = raw, "list customers invalid status filter");
                    return Err(err.into());
                }
            },
        };

        let listed = self
            .customers
            .list(filter, request)
            .await
            .inspect_err(|err| log_failure("list customers", None, err))?;

        info!(
            returned = listed.items.len(),
            total = listed.total,
            "list customers succeeded"
        );
        Ok(listed)
    }

    /// Blank email or phone count as absent; an empty patch is a read.
    pub async fn update(&self, id: &str, patch: CustomerPatch) -> CustomerResult<CustomerModel> {
        info!(customer_id = id, "update customer invoked");
        let id = parse_id(id)?;

        let patch = patch.normalized();
        if let Err(err) = patch.validate_for_update(&self.rules) {
            warn!(customer_id = %id, field = err.field(), "update customer validation failed");
            return Err(err.into());
        }

        let updated = self
            .customers
            .update(id, patch)
            .await
            .inspect_err(|err| log_failure("update customer", Some(id), err))?;

        info!(customer_id = %updated.id, "update customer succeeded");
        Ok(updated)
    }

    pub async fn soft_delete(&self, id: &str) -> CustomerResult<()> {
        info!(customer_id = id, "soft delete customer invoked");
        let id = parse_id(id)?;

        self.customers
            .soft_delete(id)
            .await
            .inspect_err(|err| log_failure("soft delete customer", Some(id), err))?;

        info!(customer_id = %id, "soft delete customer succeeded");
        Ok(())
    }

    /// Record a PAN for the customer and put the verification in `PENDING`
    pub async fn create_verification(
        &self,
        customer_id: &str,
        pan_number: &str,
    ) -> CustomerResult<VerificationModel> {
        info!(customer_id, "create verification invoked");
        let customer_id = parse_id(customer_id)?;

        let pan_number = normalize_pan(pan_number).map_err(|err| {
            warn!(customer_id = %customer_id, "create verification invalid PAN");
            CustomerError::from(err)
        })?;

        let verification = self
            .verifications
            .create_verification(NewVerification {
                customer_id,
                pan_number,
                status: VerificationStatus::default(),
            })
            .await
            .inspect_err(|err| log_failure("create verification", Some(customer_id), err))?;

        info!(
            verification_id = %verification.id,
            customer_id = %customer_id,
            "create verification succeeded"
        );
        Ok(verification)
    }

    pub async fn get_verification(&self, customer_id: &str) -> CustomerResult<VerificationModel> {
        info!(customer_id, "get verification invoked");
        let customer_id = parse_id(customer_id)?;

        let verification = self
            .verifications
            .get_verification_by_customer_id(customer_id)
            .await
            .inspect_err(|err| log_failure("get verification", Some(customer_id), err))?;

        debug!(
            verification_id = %verification.id,
            customer_id = %customer_id,
            "get verification succeeded"
        );
        Ok(verification)
    }

    /// The status literal is checked before storage is touched. Returns the
    /// verification as re-read after the write.
    pub async fn update_verification_status(
        &self,
        customer_id: &str,
        status: &str,
    ) -> CustomerResult<VerificationModel> {
        info!(customer_id, status, "update verification status invoked");
        let customer_id = parse_id(customer_id)?;

        let status = status.parse::<VerificationStatus>().map_err(|err| {
            warn!(customer_id = %customer_id, status, "update verification invalid status");
            CustomerError::from(err)
        })?;

        self.verifications
            .update_verification_status(customer_id, status)
            .await
            .inspect_err(|err| log_failure("update verification status", Some(customer_id), err))?;

        let verification = self
            .verifications
            .get_verification_by_customer_id(customer_id)
            .await
            .inspect_err(|err| {
                log_failure("get verification after update", Some(customer_id), err)
            })?;

        info!(
            verification_id = %verification.id,
            customer_id = %customer_id,
            status = %verification.status,
            "update verification status succeeded"
        );
        Ok(verification)
    }
}

fn parse_id(raw: &str) -> CustomerResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        warn!(customer_id = raw, "invalid customer id");
        CustomerError::InvalidArgument(format!("invalid customer id: {raw:?}"))
    })
}

/// Caller-side outcomes are warnings; store failures are errors
fn log_failure(operation: &str, customer_id: Option<Uuid>, err: &CustomerError) {
    let customer_id = customer_id.map(|id| id.to_string());
    let customer_id = customer_id.as_deref();
    match err {
        CustomerError::StorageUnavailable(_) | CustomerError::Internal(_) => {
            error!(operation, customer_id, error = %err, "operation failed")
        }
        _ => warn!(operation, customer_id, error = %err, "operation rejected"),
    }
}
