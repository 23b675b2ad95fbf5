pub mod repo_impl;
pub mod patch;
pub mod create;
pub mod get;
pub mod list;
pub mod update;
pub mod soft_delete;

pub use repo_impl::CustomerRepositoryImpl;
