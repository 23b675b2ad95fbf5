pub mod customer;
pub mod pan;
pub mod status;

pub use customer::*;
pub use pan::*;
pub use status::*;
