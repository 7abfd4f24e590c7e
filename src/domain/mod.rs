//! Domain Layer
//!
//! The core of Enroll - validated records without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Record, Registry)
//! - `value_objects/` - Immutable value types (PersonName)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Validate on write** - Names are checked whenever they are set
//! 3. **Ports & Adapters** - Persistence goes through the `RecordStore` port

pub mod entities;
pub mod ports;
pub mod value_objects;
