pub mod customer;
pub mod verification;

pub use customer::*;
pub use verification::*;
