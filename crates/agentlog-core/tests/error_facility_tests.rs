#![allow(clippy::unwrap_used, clippy::expect_used)]

use agentlog_core::{ErrorKind, Level, LoggerError, Settings};
use std::collections::HashMap;

#[test]
fn test_invalid_level_verifiable_by_kind() {
    let err: LoggerError = "Debug".parse::<Level>().unwrap_err().into();

    assert_eq!(err.kind(), ErrorKind::InvalidLevel);
    assert_eq!(err.code(), "ERR_INVALID_LEVEL");
    assert!(err.to_string().contains("\"Debug\""));
}

#[test]
fn test_invalid_name_distinct_from_invalid_level() {
    let err = LoggerError::InvalidName {
        name: " ".to_string(),
        reason: "name cannot be whitespace-only".to_string(),
    };

    assert_eq!(err.kind(), ErrorKind::InvalidName);
    assert_ne!(err.kind(), ErrorKind::InvalidLevel);
}

#[test]
fn test_config_error_maps_to_settings_unavailable() {
    let err: LoggerError = config::ConfigError::Message("bad source".to_string()).into();

    assert_eq!(err.kind(), ErrorKind::SettingsUnavailable);
    assert!(err.to_string().contains("bad source"));
}

#[test]
fn test_settings_pass_level_through_for_factory_validation() {
    let mut vars = HashMap::new();
    vars.insert("LOG_LEVEL".to_string(), "TRACE".to_string());
    let settings = Settings::load_from_map(vars).unwrap();

    let err: LoggerError = settings.log_level.parse::<Level>().unwrap_err().into();
    assert_eq!(
        err,
        LoggerError::InvalidLevel {
            level: "TRACE".to_string()
        }
    );
}
