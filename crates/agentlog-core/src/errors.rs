use thiserror::Error;

/// Result type alias using LoggerError
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and diagnostics can
/// match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName,
    InvalidLevel,
    SettingsUnavailable,
    AlreadyInitialised,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidName => "ERR_INVALID_NAME",
            ErrorKind::InvalidLevel => "ERR_INVALID_LEVEL",
            ErrorKind::SettingsUnavailable => "ERR_SETTINGS_UNAVAILABLE",
            ErrorKind::AlreadyInitialised => "ERR_ALREADY_INITIALISED",
        }
    }
}

/// Errors raised by the logger factory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    /// Logger name is empty, blank, or contains control characters
    #[error("Invalid logger name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// Severity string is not one of the canonical levels
    #[error("Invalid level {level:?}: expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL")]
    InvalidLevel { level: String },

    /// The settings source could not supply a default level
    #[error("Settings unavailable: {reason}")]
    SettingsUnavailable { reason: String },

    /// A process-wide registry was already installed
    #[error("Process-wide logger registry is already initialised")]
    AlreadyInitialised,
}

impl LoggerError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoggerError::InvalidName { .. } => ErrorKind::InvalidName,
            LoggerError::InvalidLevel { .. } => ErrorKind::InvalidLevel,
            LoggerError::SettingsUnavailable { .. } => ErrorKind::SettingsUnavailable,
            LoggerError::AlreadyInitialised => ErrorKind::AlreadyInitialised,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<agentlog_core_types::ParseLevelError> for LoggerError {
    fn from(err: agentlog_core_types::ParseLevelError) -> Self {
        LoggerError::InvalidLevel {
            level: err.token().to_string(),
        }
    }
}

impl From<config::ConfigError> for LoggerError {
    fn from(err: config::ConfigError) -> Self {
        LoggerError::SettingsUnavailable {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentlog_core_types::Level;

    #[test]
    fn test_kind_code_mapping() {
        let kinds = vec![
            (ErrorKind::InvalidName, "ERR_INVALID_NAME"),
            (ErrorKind::InvalidLevel, "ERR_INVALID_LEVEL"),
            (ErrorKind::SettingsUnavailable, "ERR_SETTINGS_UNAVAILABLE"),
            (ErrorKind::AlreadyInitialised, "ERR_ALREADY_INITIALISED"),
        ];

        for (kind, expected_code) in kinds {
            assert_eq!(kind.code(), expected_code);
        }
    }

    #[test]
    fn test_parse_failure_becomes_invalid_level() {
        let err: LoggerError = "VERBOSE".parse::<Level>().unwrap_err().into();
        assert_eq!(
            err,
            LoggerError::InvalidLevel {
                level: "VERBOSE".to_string()
            }
        );
        assert_eq!(err.code(), "ERR_INVALID_LEVEL");
    }

    #[test]
    fn test_display_mentions_offending_value() {
        let err = LoggerError::InvalidName {
            name: "".to_string(),
            reason: "name cannot be empty".to_string(),
        };
        assert!(err.to_string().contains("name cannot be empty"));
    }
}
