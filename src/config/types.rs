//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::infrastructure::JsonRecordStore;

use super::loader::{self, ConfigWarning};

/// Default enrollment file, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

/// Where and how enrollments are persisted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_file")]
    pub file: PathBuf,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,

    #[serde(default = "default_true")]
    pub backup_on_recover: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            atomic_writes: true,
            backup_on_recover: true,
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Override the enrollment file path
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.storage.file = file.into();
        self
    }

    /// Build the record store described by this configuration
    pub fn record_store(&self) -> JsonRecordStore {
        JsonRecordStore::new()
            .with_atomic_writes(self.storage.atomic_writes)
            .with_backup_on_recover(self.storage.backup_on_recover)
    }
}
