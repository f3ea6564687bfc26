//! Runtime configuration for calendar hosts.
//!
//! # Responsibility
//! - Load optional JSON config files with serde defaults.
//! - Apply `PROMO_CALENDAR_*` environment overrides on top.
//!
//! # Invariants
//! - Blank environment values are ignored, never applied.
//! - Loading never touches logging state; hosts decide when to init logs.

use crate::layout::window::ViewMode;
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_EVENTS_PATH: &str = "PROMO_CALENDAR_EVENTS_PATH";
pub const ENV_VIEW: &str = "PROMO_CALENDAR_VIEW";
pub const ENV_LOG_LEVEL: &str = "PROMO_CALENDAR_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PROMO_CALENDAR_LOG_DIR";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidValue {
        key: &'static str,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Calendar host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// JSON document file with promo records.
    pub events_path: Option<PathBuf>,
    /// Initial view mode.
    pub view_mode: ViewMode,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            view_mode: ViewMode::Week,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CalendarConfig {
    /// Reads a JSON config file; missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given (defaults otherwise), then applies the process
    /// environment.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Takes a lookup function so callers and tests can supply their own
    /// environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(value) = read(ENV_EVENTS_PATH) {
            self.events_path = Some(PathBuf::from(value));
        }
        if let Some(value) = read(ENV_VIEW) {
            self.view_mode = value.parse().map_err(|err| ConfigError::InvalidValue {
                key: ENV_VIEW,
                message: format!("{err}"),
            })?;
        }
        if let Some(value) = read(ENV_LOG_LEVEL) {
            self.log_level = value;
        }
        if let Some(value) = read(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(value));
        }
        Ok(())
    }
}
