//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod record_store;

pub use record_store::{LoadOutcome, RecordStore, StoreError, StoreResult};
