//! In-memory repositories with the same uniqueness, soft-delete and
//! transition rules as the PostgreSQL implementation.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use customer_core_api::domain::{CustomerPatch, NewCustomer, VerificationStatus};
use customer_core_api::error::{ConflictTarget, CustomerError, CustomerResult};
use customer_core_db::models::customer::{CustomerFilter, CustomerModel};
use customer_core_db::models::verification::{NewVerification, VerificationModel};
use customer_core_db::repository::customer::CustomerRepository;
use customer_core_db::repository::pagination::{Page, PageRequest};
use customer_core_db::repository::verification::VerificationRepository;
use heapless::String as HeaplessString;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::service::CustomerService;

struct StoredCustomer {
    model: CustomerModel,
    deleted: bool,
}

#[derive(Default)]
struct State {
    customers: Vec<StoredCustomer>,
    verifications: HashMap<Uuid, VerificationModel>,
    ticks: i64,
    writes: usize,
    fail_with: Option<CustomerError>,
}

impl State {
    /// Strictly increasing timestamps keep the ordering deterministic
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.ticks)
    }

    fn check_failure(&self) -> CustomerResult<()> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn live(&self, id: Uuid) -> Option<usize> {
        self.customers
            .iter()
            .position(|c| c.model.id == id && !c.deleted)
    }

    fn contact_taken(&self, email: &str, phone: &str, except: Option<Uuid>) -> bool {
        self.customers.iter().any(|c| {
            !c.deleted
                && Some(c.model.id) != except
                && c.model.email.as_str() == email
                && c.model.phone.as_str() == phone
        })
    }

    /// Customer with its verification denormalized, as the join produces it
    fn view(&self, index: usize) -> CustomerModel {
        let mut model = self.customers[index].model.clone();
        match self.verifications.get(&model.id) {
            Some(v) => {
                model.pan_number = v.pan_number.clone();
                model.status = v.status;
            }
            None => {
                model.pan_number = None;
                model.status = VerificationStatus::NotFound;
            }
        }
        model
    }
}

fn bounded<const N: usize>(value: &str) -> CustomerResult<HeaplessString<N>> {
    HeaplessString::from_str(value)
        .map_err(|_| CustomerError::Internal(format!("value too long (max {N} bytes)")))
}

#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service over this repository with the default contact rules
    pub fn service(&self) -> CustomerService {
        CustomerService::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Default::default(),
        )
    }

    /// Number of successful mutations so far
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    /// Make every following call fail with `err`
    pub fn fail_with(&self, err: CustomerError) {
        self.state.lock().unwrap().fail_with = Some(err);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository {
    async fn create(&self, customer: NewCustomer) -> CustomerResult<CustomerModel> {
        let customer = customer.normalized();
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        if state.contact_taken(&customer.email, &customer.phone, None) {
            return Err(CustomerError::Conflict(ConflictTarget::ContactDetails));
        }

        let now = state.now();
        let model = CustomerModel {
            id: Uuid::new_v4(),
            name: bounded(&customer.name)?,
            email: bounded(&customer.email)?,
            phone: bounded(&customer.phone)?,
            pan_number: None,
            status: VerificationStatus::NotFound,
            created_at: now,
            updated_at: now,
        };
        let verification = VerificationModel {
            id: Uuid::new_v4(),
            customer_id: model.id,
            pan_number: None,
            status: VerificationStatus::NotFound,
            created_at: now,
            updated_at: now,
        };
        state.verifications.insert(model.id, verification);
        state.customers.push(StoredCustomer {
            model: model.clone(),
            deleted: false,
        });
        state.writes += 1;
        Ok(model)
    }

    async fn get(&self, id: Uuid) -> CustomerResult<CustomerModel> {
        let state = self.state.lock().unwrap();
        state.check_failure()?;
        let index = state.live(id).ok_or(CustomerError::NotFound)?;
        Ok(state.view(index))
    }

    async fn list(
        &self,
        filter: CustomerFilter,
        page: PageRequest,
    ) -> CustomerResult<Page<CustomerModel>> {
        let state = self.state.lock().unwrap();
        state.check_failure()?;
        let mut matching: Vec<CustomerModel> = (0..state.customers.len())
            .filter(|&i| !state.customers[i].deleted)
            .map(|i| state.view(i))
            .filter(|c| filter.matches(c))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect();
        Ok(Page::new(items, total, page.limit, page.offset))
    }

    async fn update(&self, id: Uuid, patch: CustomerPatch) -> CustomerResult<CustomerModel> {
        let patch = patch.normalized();
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        let index = state.live(id).ok_or(CustomerError::NotFound)?;
        if patch.is_empty() {
            return Ok(state.view(index));
        }

        let current = &state.customers[index].model;
        let email = patch.email.clone().unwrap_or_else(|| current.email.to_string());
        let phone = patch.phone.clone().unwrap_or_else(|| current.phone.to_string());
        if state.contact_taken(&email, &phone, Some(id)) {
            return Err(CustomerError::Conflict(ConflictTarget::ContactDetails));
        }

        let now = state.now();
        let model = &mut state.customers[index].model;
        if let Some(name) = &patch.name {
            model.name = bounded(name)?;
        }
        model.email = bounded(&email)?;
        model.phone = bounded(&phone)?;
        model.updated_at = now;
        state.writes += 1;
        Ok(state.view(index))
    }

    async fn soft_delete(&self, id: Uuid) -> CustomerResult<()> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        let index = state.live(id).ok_or(CustomerError::NotFound)?;
        state.customers[index].deleted = true;
        let now = state.now();
        if let Some(verification) = state.verifications.get_mut(&id) {
            verification.pan_number = None;
            verification.status = VerificationStatus::NotFound;
            verification.updated_at = now;
        }
        state.writes += 1;
        Ok(())
    }
}

#[async_trait]
impl VerificationRepository for InMemoryRepository {
    async fn create_verification(
        &self,
        verification: NewVerification,
    ) -> CustomerResult<VerificationModel> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        state
            .live(verification.customer_id)
            .ok_or(CustomerError::NotFound)?;
        let pan_taken = state.verifications.values().any(|v| {
            v.customer_id != verification.customer_id
                && v.pan_number.as_deref() == Some(verification.pan_number.as_str())
        });
        if pan_taken {
            return Err(CustomerError::Conflict(ConflictTarget::PanNumber));
        }

        let now = state.now();
        let pan_number = Some(bounded(&verification.pan_number)?);
        let stored = state
            .verifications
            .entry(verification.customer_id)
            .or_insert_with(|| VerificationModel {
                id: Uuid::new_v4(),
                customer_id: verification.customer_id,
                pan_number: None,
                status: VerificationStatus::NotFound,
                created_at: now,
                updated_at: now,
            });
        stored.pan_number = pan_number;
        stored.status = verification.status;
        stored.updated_at = now;
        let stored = stored.clone();
        state.writes += 1;
        Ok(stored)
    }

    async fn get_verification_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> CustomerResult<VerificationModel> {
        let state = self.state.lock().unwrap();
        state.check_failure()?;
        state
            .live(customer_id)
            .and_then(|_| state.verifications.get(&customer_id))
            .cloned()
            .ok_or(CustomerError::VerificationNotFound)
    }

    async fn update_verification_status(
        &self,
        customer_id: Uuid,
        status: VerificationStatus,
    ) -> CustomerResult<()> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        if state.live(customer_id).is_none() {
            return Err(CustomerError::VerificationNotFound);
        }
        let now = state.now();
        let verification = state
            .verifications
            .get_mut(&customer_id)
            .ok_or(CustomerError::VerificationNotFound)?;
        if status.requires_document() && !verification.has_document() {
            return Err(CustomerError::PreconditionFailed(format!(
                "PAN number is required before moving to {status}"
            )));
        }
        verification.status = status;
        verification.updated_at = now;
        state.writes += 1;
        Ok(())
    }
}
