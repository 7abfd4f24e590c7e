//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Record` - One student enrolled in one course
//! - `Registry` - The ordered collection of records for a session

mod record;
mod registry;

pub use record::{HasName, Record};
pub use registry::Registry;
