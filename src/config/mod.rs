//! Configuration module for Enroll
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variable (ENROLL_FILE)
//! 3. Project config (./enroll.toml)
//! 4. User config (~/.config/enroll/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, FILE_ENV_VAR, PROJECT_CONFIG_FILE,
};
pub use types::{Config, StorageConfig, DEFAULT_FILE_NAME};
