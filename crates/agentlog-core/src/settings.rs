//! Application settings and the default-level source
//!
//! The factory never owns configuration. It asks a [`SettingsSource`] for the
//! process-wide default level every time a caller omits an explicit level.
//!
//! [`Settings`] is a loaded snapshot; [`EnvSettings`] reloads from the process
//! environment and an optional `.env` file on every read, so a change to
//! `LOG_LEVEL` in either is picked up by the next factory call.

use crate::errors::{LoggerError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Supplies the process-wide default severity level
///
/// Implementations return the raw configured string; the factory validates
/// it against the canonical level set.
pub trait SettingsSource: Send + Sync {
    /// Current default level, e.g. `"INFO"`
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SettingsUnavailable`] when the configuration
    /// cannot be read.
    fn default_level(&self) -> Result<String>;
}

/// Application settings
///
/// Keys are matched case-insensitively against the environment:
/// `LOG_LEVEL` and `ENVIRONMENT`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub environment: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl Settings {
    /// Snapshot with a fixed default level
    pub fn with_log_level(level: impl Into<String>) -> Self {
        Self {
            log_level: level.into(),
            ..Self::default()
        }
    }

    /// Load from `.env` (if present) and the process environment
    ///
    /// Real environment variables take precedence over `.env` entries.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SettingsUnavailable`] if an existing `.env`
    /// file is malformed or the merged configuration cannot be deserialized.
    pub fn load() -> Result<Self> {
        EnvSettings::default().snapshot()
    }

    /// Load from an explicit environment source layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SettingsUnavailable`] if the configuration
    /// cannot be built or deserialized.
    pub fn load_from(env: config::Environment) -> Result<Self> {
        Self::load_layered(HashMap::new(), env)
    }

    /// Load from `.env` entries beneath an environment source
    ///
    /// Keys in `env` win over the same keys in `dotenv`.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load_from`].
    pub fn load_layered(dotenv: HashMap<String, String>, env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("environment", DEFAULT_ENVIRONMENT)?
            .add_source(config::Environment::default().source(Some(dotenv.into_iter().collect())))
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    /// Load from a key/value map standing in for the process environment
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load_from`].
    pub fn load_from_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::load_from(config::Environment::default().source(Some(vars.into_iter().collect())))
    }
}

impl SettingsSource for Settings {
    fn default_level(&self) -> Result<String> {
        Ok(self.log_level.clone())
    }
}

/// Settings source that re-reads `.env` and the environment on every call
///
/// The `.env` file is parsed, never exported into the process environment,
/// so edits to it are visible on the next read.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    env_file: Option<PathBuf>,
}

impl EnvSettings {
    /// Read `.env` from the given path instead of searching upward from the
    /// working directory
    pub fn with_env_file(path: impl Into<PathBuf>) -> Self {
        Self {
            env_file: Some(path.into()),
        }
    }

    /// Load a fresh [`Settings`] snapshot
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`].
    pub fn snapshot(&self) -> Result<Settings> {
        let dotenv = read_dotenv(self.env_file.as_ref())?;
        Settings::load_layered(dotenv, config::Environment::default())
    }
}

impl SettingsSource for EnvSettings {
    fn default_level(&self) -> Result<String> {
        Ok(self.snapshot()?.log_level)
    }
}

// A missing .env is normal; a malformed one is a configuration error.
fn read_dotenv(path: Option<&PathBuf>) -> Result<HashMap<String, String>> {
    let iter = match path {
        Some(path) => dotenvy::from_path_iter(path),
        None => dotenvy::dotenv_iter(),
    };
    let iter = match iter {
        Ok(iter) => iter,
        Err(err) if err.not_found() => return Ok(HashMap::new()),
        Err(err) => return Err(dotenv_error(err)),
    };
    iter.map(|item| item.map_err(dotenv_error)).collect()
}

fn dotenv_error(err: dotenvy::Error) -> LoggerError {
    LoggerError::SettingsUnavailable {
        reason: format!("failed to load .env: {}", err),
    }
}
