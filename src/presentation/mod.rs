//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating sessions with infrastructure dependencies
//! - Text rendering for the registration menu
//!
//! ## Structure
//!
//! - `cli` - Command-line flags and subcommands
//! - `factory` - Wires a session to the configured store
//! - `output` - Text rendering helpers

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{open_session, ConcreteSession};
