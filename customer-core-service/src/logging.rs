use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*};

use crate::config::{LogFormat, ServiceConfig};

/// `RUST_LOG` wins over the configured level when it is set
fn env_filter(config: &ServiceConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level).into())
        .from_env_lossy()
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &ServiceConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(false)).try_init(),
    }
}
