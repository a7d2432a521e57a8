//! Output sinks
//!
//! A sink receives every record a logger lets through. The factory only ever
//! attaches a [`ConsoleSink`]; callers may attach their own implementations
//! with [`crate::Logger::add_sink`].

use crate::record::{LineFormat, Record};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for formatted log lines
pub trait Sink: Send + Sync {
    /// Write one record
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; loggers report it and carry on.
    fn emit(&self, record: &Record) -> io::Result<()>;
}

/// Produces the writer a new console sink is bound to
pub type MakeWriter = Arc<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

/// Writer factory for standard output
pub fn stdout_writer() -> MakeWriter {
    Arc::new(|| Box::new(io::stdout()))
}

/// Line-oriented sink writing through [`LineFormat`]
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    format: LineFormat,
}

impl ConsoleSink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            format: LineFormat,
        }
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, record: &Record) -> io::Result<()> {
        let line = self.format.format(record);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}
