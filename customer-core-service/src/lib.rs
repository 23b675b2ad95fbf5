pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod service;

pub use bootstrap::{build_service, connect_service};
pub use config::{LogFormat, ServiceConfig};
pub use logging::init_tracing;
pub use service::CustomerService;

#[cfg(test)]
pub mod test_support;
