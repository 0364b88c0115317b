// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{IoContext, Result, TrackerError};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DAIRY_TRACKER_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "dairy-tracker.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the SQLite database file
    pub db_path: PathBuf,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(dairy_store_db::DEFAULT_DB_PATH),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .io_context(|| format!("Failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.db_path.as_os_str().is_empty() {
            return Err(TrackerError::config("db_path must not be empty"));
        }
        Ok(config)
    }

    /// Load from `$DAIRY_TRACKER_CONFIG`, then `./dairy-tracker.toml`,
    /// falling back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.db_path, PathBuf::from("data/milk.db"));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse(r#"db_path = "/var/lib/dairy/milk.db""#).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/dairy/milk.db"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = Config::parse("workers = 4").unwrap_err();
        assert!(matches!(err, TrackerError::Toml(_)));
    }

    #[test]
    fn test_rejects_empty_db_path() {
        let err = Config::parse(r#"db_path = """#).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dairy-tracker.toml");
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.log_level, "debug");

        let err = Config::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, TrackerError::Io { .. }));
    }
}
