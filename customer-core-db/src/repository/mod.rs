pub mod customer;
pub mod pagination;
pub mod verification;

pub use customer::*;
pub use pagination::*;
pub use verification::*;
