pub mod customer_repository;
pub mod verification_repository;
#[cfg(test)]
pub mod test_utils;

pub use customer_repository::CustomerRepositoryImpl;
pub use verification_repository::VerificationRepositoryImpl;
