//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_store;

pub use json_store::{backup_path, JsonRecordStore};
