//! Logger registry and factory
//!
//! [`LoggerRegistry`] maps names to shared [`Logger`] instances. Its
//! [`get_logger`](LoggerRegistry::get_logger) is the factory: it resolves the
//! effective level, fetches or creates the named logger, re-applies the level
//! and attaches a single console sink the first time round.
//!
//! Every registry is built with a default logger named after the application
//! (see [`APP_LOGGER_NAME`]), so collaborators can share it without calling
//! the factory themselves.

use crate::errors::{LoggerError, Result};
use crate::logger::Logger;
use crate::schema::OP_GET_LOGGER;
use crate::settings::{EnvSettings, SettingsSource};
use crate::sink::{stdout_writer, ConsoleSink, MakeWriter, Sink};
use crate::{log_op_end, log_op_error, log_op_start};
use agentlog_core_types::Level;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Name of the default logger every registry creates
pub const APP_LOGGER_NAME: &str = "my_agent_app";

pub struct LoggerRegistry {
    factory: Factory,
    app_logger: Arc<Logger>,
}

struct Factory {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    settings: Arc<dyn SettingsSource>,
    make_writer: MakeWriter,
}

impl LoggerRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry reading its default level from the process environment
    ///
    /// # Errors
    ///
    /// Fails if the default logger cannot be created, i.e. when the settings
    /// are unavailable or `LOG_LEVEL` is not a canonical level.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// Get or create the logger for `name`
    ///
    /// The effective level is `level` if given, otherwise the settings
    /// source's default at the time of the call. The level is re-applied on
    /// every call; a console sink is attached only while the logger has none.
    ///
    /// Name and level are validated before the registry is touched, so a
    /// failed call leaves no trace.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::InvalidName`] for an empty, blank or control-character name
    /// - [`LoggerError::InvalidLevel`] if the explicit or configured level is
    ///   not one of `DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`
    /// - [`LoggerError::SettingsUnavailable`] if no level was given and the
    ///   settings source fails
    pub fn get_logger(&self, name: &str, level: Option<&str>) -> Result<Arc<Logger>> {
        self.factory.get_logger(name, level)
    }

    /// The default application logger created with this registry
    pub fn app_logger(&self) -> &Arc<Logger> {
        &self.app_logger
    }

    /// Look up an existing logger without creating or configuring it
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.factory.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factory.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factory.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.factory.lock().is_empty()
    }

    /// Registered logger names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factory.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Factory {
    fn get_logger(&self, name: &str, level: Option<&str>) -> Result<Arc<Logger>> {
        let start = Instant::now();
        log_op_start!(OP_GET_LOGGER, logger = name);

        match self.configure(name, level) {
            Ok((logger, sink_attached)) => {
                log_op_end!(
                    OP_GET_LOGGER,
                    duration_ms = start.elapsed().as_millis() as u64,
                    logger = name,
                    level = logger.level().as_str(),
                    sink_attached = sink_attached
                );
                Ok(logger)
            }
            Err(err) => {
                log_op_error!(
                    OP_GET_LOGGER,
                    err,
                    duration_ms = start.elapsed().as_millis() as u64,
                    logger = name
                );
                Err(err)
            }
        }
    }

    fn configure(&self, name: &str, level: Option<&str>) -> Result<(Arc<Logger>, bool)> {
        validate_name(name)?;
        let level = self.resolve_level(level)?;

        let logger = self
            .lock()
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name, level)))
            .clone();

        logger.set_level(level);
        let sink_attached = logger.attach_if_empty(|| self.console_sink());
        Ok((logger, sink_attached))
    }

    fn resolve_level(&self, explicit: Option<&str>) -> Result<Level> {
        let token = match explicit {
            Some(token) => token.to_string(),
            None => self.settings.default_level()?,
        };
        Ok(token.parse::<Level>()?)
    }

    fn console_sink(&self) -> Arc<dyn Sink> {
        Arc::new(ConsoleSink::new((self.make_writer)()))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.names())
            .field("app_logger", &self.app_logger.name())
            .finish_non_exhaustive()
    }
}

/// Builder for [`LoggerRegistry`]
///
/// Defaults: [`EnvSettings`], [`APP_LOGGER_NAME`], standard output.
pub struct RegistryBuilder {
    settings: Arc<dyn SettingsSource>,
    app_name: String,
    make_writer: MakeWriter,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            settings: Arc::new(EnvSettings::default()),
            app_name: APP_LOGGER_NAME.to_string(),
            make_writer: stdout_writer(),
        }
    }
}

impl RegistryBuilder {
    pub fn with_settings(mut self, settings: Arc<dyn SettingsSource>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Writer factory for console sinks attached by this registry
    pub fn with_writer(mut self, make_writer: MakeWriter) -> Self {
        self.make_writer = make_writer;
        self
    }

    /// Build the registry and eagerly create its default logger
    ///
    /// # Errors
    ///
    /// Same as [`LoggerRegistry::get_logger`] for the application name with
    /// no explicit level.
    pub fn build(self) -> Result<LoggerRegistry> {
        let factory = Factory {
            loggers: Mutex::new(HashMap::new()),
            settings: self.settings,
            make_writer: self.make_writer,
        };
        let app_logger = factory.get_logger(&self.app_name, None)?;
        Ok(LoggerRegistry {
            factory,
            app_logger,
        })
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name cannot be empty"
    } else if name.trim().is_empty() {
        "name cannot be whitespace-only"
    } else if name.chars().any(char::is_control) {
        "name cannot contain control characters"
    } else {
        return Ok(());
    };
    Err(LoggerError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
