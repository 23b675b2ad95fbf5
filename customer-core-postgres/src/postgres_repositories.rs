use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::customer::{CustomerRepositoryImpl, VerificationRepositoryImpl};

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create the customer repositories over the shared pool
    pub fn create_customer_repositories(&self) -> CustomerRepositories {
        CustomerRepositories {
            customer_repository: Arc::new(CustomerRepositoryImpl::new(self.pool.clone())),
            verification_repository: Arc::new(VerificationRepositoryImpl::new(self.pool.clone())),
        }
    }
}

pub struct CustomerRepositories {
    pub customer_repository: Arc<CustomerRepositoryImpl>,
    pub verification_repository: Arc<VerificationRepositoryImpl>,
}
