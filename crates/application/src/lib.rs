//! Application layer - Use cases and business workflows

pub mod admin;
pub mod store;

pub use admin::AdminGuard;
pub use store::{Backend, FacilityStore, StorageMode};
