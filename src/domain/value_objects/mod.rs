//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod name;

pub use name::{is_valid_name, title_case, NameField, PersonName, ValidationError};
