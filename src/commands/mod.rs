//! Command handlers for the `enroll` binary

pub mod add;
pub mod interactive;
pub mod list;

use std::path::Path;

use enroll::config::{self, Config, ConfigWarning};
use enroll::presentation::output;
use enroll::StoreError;

/// Flag, then ENROLL_FILE, then enroll.toml / user config, then defaults
pub fn resolve_config(file_flag: Option<&Path>) -> Config {
    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let user_config = config::user_config_path();
    let loaded = config::load_layered(&cwd, user_config.as_deref());

    for err in &loaded.errors {
        eprintln!("⚠ Ignoring config: {}", err);
    }
    print_config_warnings(&loaded.warnings);

    let config = config::with_env_overrides(loaded.config);
    match file_flag {
        Some(file) => config.with_file(file),
        None => config,
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Report a load notice on stderr; a freshly created file is not worth mentioning
pub fn report_load_notice(notice: Option<&StoreError>) {
    match notice {
        Some(n) if !n.is_informational() => eprint!("{}", output::render_load_notice(n)),
        Some(n) => log::info!("{}", n),
        None => {}
    }
}
