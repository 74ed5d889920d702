//! Environment-driven runtime configuration.
//!
//! # Invariants
//! - Unset keys fall back to documented defaults.
//! - Set but malformed keys are errors, never silently replaced.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::service::source::DataSource;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "FOLIO_DB_PATH";
pub const ENV_DATA_SOURCE: &str = "FOLIO_DATA_SOURCE";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FOLIO_LOG_DIR";

pub const DEFAULT_DB_FILE_NAME: &str = "folio.sqlite3";

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl Error for ConfigError {}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub data_source: DataSource,
    pub log_level: &'static str,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            data_source: DataSource::default(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a raw value per key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &'static str| {
            let raw = lookup(key).filter(|value| !value.trim().is_empty());
            if raw.is_none() {
                info!("event=config_default module=config key={key}");
            }
            raw
        };

        let db_path = value(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from);

        let data_source = match value(ENV_DATA_SOURCE) {
            Some(raw) => raw.parse().map_err(|message| ConfigError {
                key: ENV_DATA_SOURCE,
                message,
            })?,
            None => defaults.data_source,
        };

        let log_level = match value(ENV_LOG_LEVEL) {
            Some(raw) => normalize_level(&raw).map_err(|message| ConfigError {
                key: ENV_LOG_LEVEL,
                message,
            })?,
            None => defaults.log_level,
        };

        let log_dir = value(ENV_LOG_DIR)
            .map(|raw| normalize_log_dir(&raw))
            .transpose()
            .map_err(|message| ConfigError {
                key: ENV_LOG_DIR,
                message,
            })?;

        Ok(Self {
            db_path,
            data_source,
            log_level,
            log_dir,
        })
    }
}
