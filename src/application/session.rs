//! Registration Session
//!
//! Owns the registry for one run of the program and routes every
//! persistence call through a `RecordStore`.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Record, Registry};
use crate::domain::ports::{LoadOutcome, RecordStore, StoreError, StoreResult};
use crate::domain::value_objects::ValidationError;

/// Registration session - the state shared by every menu action
pub struct Session<S>
where
    S: RecordStore,
{
    store: S,
    path: PathBuf,
    registry: Registry,
}

impl<S> Session<S>
where
    S: RecordStore,
{
    /// Load `path` through `store` and start a session with its records.
    ///
    /// The returned notice is set when the file was missing or unreadable.
    pub fn open(store: S, path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        let LoadOutcome { records, notice } = store.load(&path);
        log::debug!("session opened with {} records", records.len());
        let session = Self {
            store,
            path,
            registry: Registry::from(records),
        };
        (session, notice)
    }

    /// Validate and append a new record. The registry is unchanged on error.
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        course_name: &str,
    ) -> Result<&Record, ValidationError> {
        let record = Record::new(first_name, last_name, course_name)?;
        self.registry.append(record);
        let index = self.registry.len() - 1;
        Ok(&self.registry.all()[index])
    }

    pub fn records(&self) -> &[Record] {
        self.registry.all()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Write every record to the session file
    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.path, self.registry.all())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
