//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::Config;

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "enroll.toml";

/// Environment variable overriding the enrollment file path
pub const FILE_ENV_VAR: &str = "ENROLL_FILE";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Result of walking the config hierarchy
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// The file the config came from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Config files that existed but were skipped
    pub errors: Vec<ConfigError>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config, then user config, then defaults.
///
/// A config file that exists but cannot be loaded is recorded in `errors`
/// and the next layer is tried.
pub fn load_layered(project_dir: &Path, user_config: Option<&Path>) -> LoadedConfig {
    let mut loaded = LoadedConfig::default();

    let candidates = std::iter::once(project_dir.join(PROJECT_CONFIG_FILE))
        .chain(user_config.map(Path::to_path_buf));

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                log::debug!("using config {}", candidate.display());
                loaded.config = config;
                loaded.warnings = warnings;
                loaded.source = Some(candidate);
                return loaded;
            }
            Err(e) => {
                log::warn!("skipping config: {}", e);
                loaded.errors.push(e);
            }
        }
    }

    loaded
}

/// `<config_dir>/enroll/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("enroll").join("config.toml"))
}

/// Apply environment variable overrides from the process environment
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply environment variable overrides from `lookup`
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // ENROLL_FILE
    if let Some(file) = lookup(FILE_ENV_VAR) {
        if !file.trim().is_empty() {
            config.storage.file = PathBuf::from(file);
        }
    }

    config
}

/// 1-based line of the first line mentioning `needle`
fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|index| index + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["storage", "file", "atomic_writes", "backup_on_recover"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

/// Edit distance between two keys, counted in chars
fn levenshtein(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, source_char) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &target_char) in target.iter().enumerate() {
            let substitution = diagonal + usize::from(source_char != target_char);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[target.len()]
}
