//! Log records and the fixed console line format

use agentlog_core_types::Level;
use chrono::{DateTime, Local};

/// Timestamp layout: `2024-05-01 13:45:12,034`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Separator between the fields of a console line
pub const FIELD_SEPARATOR: &str = " - ";

/// A single message accepted by a logger
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: DateTime<Local>,
    pub logger: String,
    pub level: Level,
    pub message: String,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn now(logger: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            logger: logger.into(),
            level,
            message: message.into(),
        }
    }
}

/// Renders `<timestamp> - <logger name> - <LEVEL> - <message>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormat;

impl LineFormat {
    pub fn format(&self, record: &Record) -> String {
        format!(
            "{ts}{sep}{name}{sep}{level}{sep}{msg}",
            ts = record.timestamp.format(TIMESTAMP_FORMAT),
            sep = FIELD_SEPARATOR,
            name = record.logger,
            level = record.level,
            msg = record.message,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_record(level: Level, message: &str) -> Record {
        Record {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 13, 45, 12).unwrap()
                + chrono::Duration::milliseconds(34),
            logger: "svc_a".to_string(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_line_layout() {
        let line = LineFormat.format(&fixed_record(Level::Info, "started"));
        assert_eq!(line, "2024-05-01 13:45:12,034 - svc_a - INFO - started");
    }

    #[test]
    fn test_message_is_not_escaped() {
        let line = LineFormat.format(&fixed_record(Level::Warning, "a - b"));
        assert!(line.ends_with(" - svc_a - WARNING - a - b"));
    }

    #[test]
    fn test_now_uses_given_fields() {
        let record = Record::now("svc_b", Level::Error, "boom");
        assert_eq!(record.logger, "svc_b");
        assert_eq!(record.level, Level::Error);
        assert_eq!(record.message, "boom");
    }
}
