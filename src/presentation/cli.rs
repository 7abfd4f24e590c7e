//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Running without a subcommand starts the interactive registration menu.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Enroll - course registration record keeper
#[derive(Parser, Debug)]
#[command(name = "enroll")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'enroll' without arguments for the interactive menu.")]
pub struct Cli {
    /// Enrollment file (overrides ENROLL_FILE and enroll.toml)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Register a student for a course and save immediately
    Add {
        /// Student's first name (letters only)
        first_name: String,

        /// Student's last name (letters only)
        last_name: String,

        /// Course name
        course_name: String,
    },

    /// Show current registrations
    List,
}
