//! Enroll - course registration record keeper
//!
//! Collects student/course enrollments, validates names, and persists the
//! whole collection to a JSON file that is reloaded on startup.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::Session;
pub use config::Config;
pub use domain::entities::{HasName, Record, Registry};
pub use domain::ports::{LoadOutcome, RecordStore, StoreError, StoreResult};
pub use domain::value_objects::{NameField, ValidationError};
pub use error::{ConfigError, EnrollError, EnrollResult};
pub use infrastructure::JsonRecordStore;
