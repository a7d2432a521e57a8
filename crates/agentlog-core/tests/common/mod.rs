use agentlog_core::{LoggerError, LoggerRegistry, MakeWriter, SettingsSource};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, RwLock};

/// In-memory stand-in for standard output
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    #[allow(dead_code)]
    pub fn make_writer(&self) -> MakeWriter {
        let buffer = self.clone();
        Arc::new(move || Box::new(buffer.clone()))
    }

    /// Everything written so far, split into lines
    #[allow(dead_code)]
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Settings source whose default level can change between calls
#[allow(dead_code)]
pub struct MutableSettings(RwLock<String>);

impl MutableSettings {
    #[allow(dead_code)]
    pub fn new(level: &str) -> Arc<Self> {
        Arc::new(Self(RwLock::new(level.to_string())))
    }

    #[allow(dead_code)]
    pub fn set(&self, level: &str) {
        *self.0.write().unwrap() = level.to_string();
    }
}

impl SettingsSource for MutableSettings {
    fn default_level(&self) -> agentlog_core::Result<String> {
        Ok(self.0.read().unwrap().clone())
    }
}

/// Settings source that always fails
#[allow(dead_code)]
pub struct UnavailableSettings;

impl SettingsSource for UnavailableSettings {
    fn default_level(&self) -> agentlog_core::Result<String> {
        Err(LoggerError::SettingsUnavailable {
            reason: "LOG_LEVEL could not be read".to_string(),
        })
    }
}

/// Registry over mutable settings, writing into a shared buffer
#[allow(dead_code)]
pub fn test_registry(default_level: &str) -> (LoggerRegistry, Arc<MutableSettings>, SharedBuffer) {
    let settings = MutableSettings::new(default_level);
    let buffer = SharedBuffer::default();
    let registry = LoggerRegistry::builder()
        .with_settings(settings.clone())
        .with_writer(buffer.make_writer())
        .build()
        .unwrap();
    (registry, settings, buffer)
}

/// Split a console line into (timestamp, name, level, message)
#[allow(dead_code)]
pub fn split_line(line: &str) -> (String, String, String, String) {
    let parts: Vec<&str> = line.splitn(4, " - ").collect();
    assert_eq!(parts.len(), 4, "malformed line: {}", line);
    (
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
        parts[3].to_string(),
    )
}

/// Check a `YYYY-MM-DD HH:MM:SS,mmm` timestamp
#[allow(dead_code)]
pub fn assert_timestamp(ts: &str) {
    assert_eq!(ts.len(), 23, "unexpected timestamp: {}", ts);
    assert!(
        chrono::NaiveDateTime::parse_from_str(&ts[..19], "%Y-%m-%d %H:%M:%S").is_ok(),
        "unexpected timestamp: {}",
        ts
    );
    assert_eq!(&ts[19..20], ",");
    assert!(ts[20..].chars().all(|c| c.is_ascii_digit()));
}
