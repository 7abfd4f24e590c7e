//! Enroll CLI - course registration record keeper
//!
//! Usage: enroll [--file PATH] [COMMAND]
//!
//! Commands:
//!   add     Register a student for a course and save
//!   list    Show current registrations
//!
//! Without a command, the interactive registration menu starts.

mod commands;

use anyhow::Result;
use clap::Parser;

use enroll::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::resolve_config(cli.file.as_deref());

    match cli.command {
        None => commands::interactive::cmd_interactive(&config),
        Some(Commands::Add {
            first_name,
            last_name,
            course_name,
        }) => commands::add::cmd_add(&config, &first_name, &last_name, &course_name),
        Some(Commands::List) => commands::list::cmd_list(&config),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
