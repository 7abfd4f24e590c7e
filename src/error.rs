//! Error types for Enroll
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::domain::ports::StoreError;
pub use crate::domain::value_objects::ValidationError;

/// Result type alias for Enroll operations
pub type EnrollResult<T> = Result<T, EnrollError>;

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Main error type for Enroll operations
#[derive(Error, Debug)]
pub enum EnrollError {
    /// A name field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Loading or saving the enrollment file failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}
