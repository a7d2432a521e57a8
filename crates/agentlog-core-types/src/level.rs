//! Severity levels
//!
//! The fixed, ordered severity set shared by every logger:
//! `DEBUG < INFO < WARNING < ERROR < CRITICAL`.
//!
//! Levels parse only from their canonical upper-case spelling. There is no
//! alias (`WARN`, `FATAL`) and no case folding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Message severity
///
/// Variants are declared in ascending severity so the derived `Ord` matches
/// the filtering order used by loggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Every level, lowest severity first
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Canonical upper-case name, as printed in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the canonical level names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown level: {token:?} (expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL)")]
pub struct ParseLevelError {
    token: String,
}

impl ParseLevelError {
    /// The rejected input
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError {
                token: s.to_string(),
            })
    }
}
