pub mod config;
pub(crate) mod error;
pub mod pool;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::DatabaseConfig;
pub use pool::{connect, health_check};
pub use postgres_repositories::{CustomerRepositories, PostgresRepositories};
pub use repository::customer::{CustomerRepositoryImpl, VerificationRepositoryImpl};

#[cfg(test)]
pub mod test_helper;
