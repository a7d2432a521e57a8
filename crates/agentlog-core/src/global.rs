//! Process-wide registry
//!
//! For code that does not carry a [`LoggerRegistry`] around. The first call
//! to [`global`] builds one from the environment unless [`init_global`] has
//! already installed another.

use crate::errors::{LoggerError, Result};
use crate::logger::Logger;
use crate::registry::LoggerRegistry;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// Install the process-wide registry
///
/// # Errors
///
/// Returns [`LoggerError::AlreadyInitialised`] if a registry is already in
/// place, including one built lazily by [`global`].
pub fn init_global(registry: LoggerRegistry) -> Result<&'static LoggerRegistry> {
    GLOBAL
        .set(registry)
        .map_err(|_| LoggerError::AlreadyInitialised)?;
    GLOBAL.get().ok_or(LoggerError::AlreadyInitialised)
}

/// The process-wide registry, built from the environment on first use
///
/// # Errors
///
/// Propagates the failure of [`LoggerRegistry::from_env`] when no registry
/// has been installed yet. The next call retries.
pub fn global() -> Result<&'static LoggerRegistry> {
    if let Some(registry) = GLOBAL.get() {
        return Ok(registry);
    }
    let registry = LoggerRegistry::from_env()?;
    // A concurrent caller may have won the race; its registry is kept.
    Ok(GLOBAL.get_or_init(|| registry))
}

/// [`LoggerRegistry::get_logger`] on the process-wide registry
///
/// # Errors
///
/// See [`global`] and [`LoggerRegistry::get_logger`].
pub fn get_logger(name: &str, level: Option<&str>) -> Result<Arc<Logger>> {
    global()?.get_logger(name, level)
}

/// The default application logger of the process-wide registry
///
/// # Errors
///
/// See [`global`].
pub fn app_logger() -> Result<Arc<Logger>> {
    Ok(global()?.app_logger().clone())
}
