pub mod repo_impl;
pub mod create_verification;
pub mod get_verification;
pub mod update_status;

pub use repo_impl::VerificationRepositoryImpl;
