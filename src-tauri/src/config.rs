//! Persisted configuration
//!
//! - `model`: the `Config` record and its merge rules
//! - `store`: file-backed store with a read-through cache

pub mod model;
pub mod store;

pub use model::Config;
pub use store::ConfigStore;
