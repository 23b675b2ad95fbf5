//! Connection pool construction

use customer_core_api::error::{CustomerError, CustomerResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::error::translate;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the shared pool and verify the database answers.
///
/// A pool whose first ping fails is closed before the error is returned.
pub async fn connect(config: &DatabaseConfig) -> CustomerResult<PgPool> {
    let options = config.connect_options().map_err(translate)?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        max_idle_time = ?config.max_idle_time,
        "creating database pool"
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .idle_timeout(config.max_idle_time)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!(error = %e, "database pool creation failed");
            translate(e)
        })?;

    let ping = match tokio::time::timeout(PING_TIMEOUT, health_check(&pool)).await {
        Ok(result) => result,
        Err(_) => Err(CustomerError::StorageUnavailable(
            "database ping timed out".to_string(),
        )),
    };
    if let Err(e) = ping {
        error!(error = %e, "database ping failed");
        pool.close().await;
        return Err(e);
    }

    info!("database pool ready");
    Ok(pool)
}

/// Round-trip a trivial statement through the pool
pub async fn health_check(pool: &PgPool) -> CustomerResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(translate)?;
    Ok(())
}
