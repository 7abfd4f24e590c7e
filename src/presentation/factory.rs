//! Session Factory
//!
//! Wires a `Session` to the JSON store described by the configuration.

use crate::application::Session;
use crate::config::Config;
use crate::domain::ports::StoreError;
use crate::infrastructure::JsonRecordStore;

/// Type alias for the session used by the binary
pub type ConcreteSession = Session<JsonRecordStore>;

/// Load the configured enrollment file and start a session
pub fn open_session(config: &Config) -> (ConcreteSession, Option<StoreError>) {
    Session::open(config.record_store(), config.storage.file.clone())
}
