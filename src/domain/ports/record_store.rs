//! RecordStore port - abstraction for record persistence
//!
//! Loading never fails: a missing or unreadable file degrades to an empty
//! collection plus a notice describing what happened. Saving reports its
//! error and leaves the caller's records untouched.

use std::path::{Path, PathBuf};

use crate::domain::entities::Record;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The file did not exist (an empty one was created in its place)
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file exists but is not an array of enrollment objects
    #[error("could not parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Records could not be encoded
    #[error("records are not valid JSON: {message}")]
    Serialization { message: String },

    /// Any other I/O failure
    #[error("I/O error on {path}: {message}")]
    Io { path: PathBuf, message: String },
}

impl StoreError {
    /// Informational conditions that are part of normal first-run behavior
    pub fn is_informational(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// What `RecordStore::load` produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    /// Set when the file was missing or could not be parsed
    pub notice: Option<StoreError>,
}

impl LoadOutcome {
    pub fn loaded(records: Vec<Record>) -> Self {
        Self {
            records,
            notice: None,
        }
    }

    pub fn empty_with(notice: StoreError) -> Self {
        Self {
            records: Vec::new(),
            notice: Some(notice),
        }
    }

    /// True when the records did not come from a successful parse
    pub fn recovered(&self) -> bool {
        self.notice.is_some()
    }
}

/// Abstract repository for enrollment persistence
pub trait RecordStore {
    /// Load all records from `path`, recovering from every failure
    fn load(&self, path: &Path) -> LoadOutcome;

    /// Overwrite `path` with `records`, in order
    fn save(&self, path: &Path, records: &[Record]) -> StoreResult<()>;
}
