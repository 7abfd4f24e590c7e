//! JSON Record Store
//!
//! Implements the RecordStore port as a JSON array of objects:
//!
//! ```json
//! [
//!  {
//!   "FirstName": "Mary",
//!   "LastName": "Smith",
//!   "CourseName": "Biology 101"
//!  }
//! ]
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{HasName, Record};
use crate::domain::ports::{LoadOutcome, RecordStore, StoreError, StoreResult};

/// On-disk representation of one enrollment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct JsonEnrollment {
    #[serde(rename = "FirstName", default)]
    first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    last_name: Option<String>,
    #[serde(rename = "CourseName", default)]
    course_name: Option<String>,
}

impl JsonEnrollment {
    fn from_record(record: &Record) -> Self {
        Self {
            first_name: Some(record.first_name()),
            last_name: Some(record.last_name()),
            course_name: Some(record.course_name().to_string()),
        }
    }

    fn into_record(self) -> Record {
        Record::from_persisted(
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.course_name.unwrap_or_default(),
        )
    }
}

/// JSON-file-backed record store
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    atomic_writes: bool,
    backup_on_recover: bool,
}

impl JsonRecordStore {
    /// Atomic writes and recovery backups enabled
    pub fn new() -> Self {
        Self {
            atomic_writes: true,
            backup_on_recover: true,
        }
    }

    /// Write through a temp file + rename instead of truncating in place
    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    /// Copy an unparsable file to `<file>.bak` before recovering from it
    pub fn with_backup_on_recover(mut self, enabled: bool) -> Self {
        self.backup_on_recover = enabled;
        self
    }

    fn bootstrap(&self, path: &Path) -> LoadOutcome {
        log::info!("{} not found, creating an empty one", path.display());
        match self.write_bytes(path, &encode(&[])) {
            Ok(()) => LoadOutcome::empty_with(StoreError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(err) => {
                log::warn!("could not create {}: {}", path.display(), err);
                LoadOutcome::empty_with(err)
            }
        }
    }

    fn recover(&self, path: &Path, message: String) -> LoadOutcome {
        log::warn!("{} is not a valid enrollment file: {}", path.display(), message);
        if self.backup_on_recover {
            let backup = backup_path(path);
            match fs::copy(path, &backup) {
                Ok(_) => log::info!("kept unreadable contents in {}", backup.display()),
                Err(e) => log::warn!("could not back up to {}: {}", backup.display(), e),
            }
        }
        LoadOutcome::empty_with(StoreError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> StoreResult<()> {
        let io_err = |e: std::io::Error| StoreError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_err)?;

        if !self.atomic_writes {
            return fs::write(path, content).map_err(io_err);
        }

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(content).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl Default for JsonRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for JsonRecordStore {
    fn load(&self, path: &Path) -> LoadOutcome {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return self.bootstrap(path),
            Err(e) => {
                log::warn!("could not read {}: {}", path.display(), e);
                return LoadOutcome::empty_with(StoreError::Io {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };

        match serde_json::from_slice::<Vec<JsonEnrollment>>(&content) {
            Ok(entries) => {
                let records: Vec<Record> =
                    entries.into_iter().map(JsonEnrollment::into_record).collect();
                log::debug!("loaded {} records from {}", records.len(), path.display());
                LoadOutcome::loaded(records)
            }
            Err(e) => self.recover(path, e.to_string()),
        }
    }

    fn save(&self, path: &Path, records: &[Record]) -> StoreResult<()> {
        let entries: Vec<JsonEnrollment> = records.iter().map(JsonEnrollment::from_record).collect();
        let content = try_encode(&entries)?;

        self.write_bytes(path, &content).inspect_err(|e| {
            log::warn!("save failed: {}", e);
        })?;

        log::info!("saved {} records to {}", records.len(), path.display());
        Ok(())
    }
}

/// `<file>.bak` next to `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

fn try_encode(entries: &[JsonEnrollment]) -> StoreResult<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    entries
        .serialize(&mut ser)
        .map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;
    Ok(out)
}

fn encode(entries: &[JsonEnrollment]) -> Vec<u8> {
    try_encode(entries).unwrap_or_else(|_| b"[]".to_vec())
}
