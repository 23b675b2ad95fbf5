//! Wiring of the service over PostgreSQL.

use customer_core_api::error::CustomerResult;
use customer_core_postgres::{connect, DatabaseConfig, PostgresRepositories};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::warn;

use crate::config::ServiceConfig;
use crate::service::CustomerService;

/// Build the service over an existing pool
pub fn build_service(pool: Arc<PgPool>, config: &ServiceConfig) -> CustomerService {
    let repos = PostgresRepositories::new(pool).create_customer_repositories();
    CustomerService::new(
        repos.customer_repository,
        repos.verification_repository,
        config.contact_rules(),
    )
}

/// Connect to the configured database and build the service.
///
/// Configuration warnings are logged here, so tracing should be initialised first.
pub async fn connect_service(
    database: &DatabaseConfig,
    config: &ServiceConfig,
    warnings: &[String],
) -> CustomerResult<CustomerService> {
    for warning in warnings {
        warn!("{warning}");
    }
    let pool = connect(database).await?;
    Ok(build_service(Arc::new(pool), config))
}
