//! agentlog Core - named-logger factory
//!
//! This crate hands out named loggers that write timestamped, leveled lines
//! to standard output:
//! - `LoggerRegistry::get_logger` resolves the effective level (explicit or
//!   configured default), fetches or creates the logger and attaches exactly
//!   one console sink
//! - A default application logger is created with every registry
//! - A lazily built process-wide registry backs the free `get_logger` and
//!   `app_logger` functions
//! - Settings come from the environment and an optional `.env` file
//! - The factory's own diagnostics go through `tracing` (`logging_facility`)
//!
//! # Example
//!
//! ```
//! use agentlog_core::{LoggerRegistry, Settings};
//! use std::sync::Arc;
//!
//! let registry = LoggerRegistry::builder()
//!     .with_settings(Arc::new(Settings::with_log_level("INFO")))
//!     .build()?;
//! let logger = registry.get_logger("svc_a", None)?;
//! logger.info("started");
//! # Ok::<(), agentlog_core::LoggerError>(())
//! ```

pub mod errors;
pub mod global;
pub mod logger;
pub mod logging_facility;
pub mod record;
pub mod registry;
pub mod settings;
pub mod sink;

pub use agentlog_core_types::schema;

// Re-export commonly used types
pub use agentlog_core_types::{Level, ParseLevelError};
pub use errors::{ErrorKind, LoggerError, Result};
pub use global::{app_logger, get_logger, global, init_global};
pub use logger::Logger;
pub use record::{LineFormat, Record};
pub use registry::{LoggerRegistry, RegistryBuilder, APP_LOGGER_NAME};
pub use settings::{EnvSettings, Settings, SettingsSource};
pub use sink::{ConsoleSink, MakeWriter, Sink};
