//! Named loggers
//!
//! A [`Logger`] has an immutable name, a mutable level and an ordered list of
//! sinks. Messages at or above the level are handed to every sink in order.

use crate::record::Record;
use crate::schema::OP_EMIT;
use crate::sink::Sink;
use agentlog_core_types::Level;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct Logger {
    name: String,
    level: RwLock<Level>,
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(level),
            sinks: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        *read(&self.level)
    }

    pub fn set_level(&self, level: Level) {
        *write(&self.level) = level;
    }

    /// Number of attached sinks
    pub fn sink_count(&self) -> usize {
        read(&self.sinks).len()
    }

    /// Append a sink
    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        write(&self.sinks).push(sink);
    }

    /// Attach the sink built by `make` only if no sink is attached yet
    ///
    /// The emptiness check and the push happen under one write lock, so
    /// concurrent callers attach at most one sink between them. Returns
    /// whether a sink was attached.
    pub(crate) fn attach_if_empty<F>(&self, make: F) -> bool
    where
        F: FnOnce() -> Arc<dyn Sink>,
    {
        let mut sinks = write(&self.sinks);
        if sinks.is_empty() {
            sinks.push(make());
            true
        } else {
            false
        }
    }

    /// Whether a message at `level` would reach the sinks
    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Route a message to every sink if `level` meets the logger's level
    ///
    /// Sink failures are reported as diagnostics and never returned to the
    /// caller.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.is_enabled_for(level) {
            return;
        }
        let record = Record::now(self.name.as_str(), level, message.to_string());
        let sinks = read(&self.sinks).clone();
        for sink in sinks {
            if let Err(err) = sink.emit(&record) {
                tracing::warn!(
                    component = module_path!(),
                    op = OP_EMIT,
                    logger = %self.name,
                    error = %err,
                    "sink write failed"
                );
            }
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Level::Critical, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

// A panic while holding one of these locks cannot leave the guarded value
// half-written, so poisoning is ignored.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<(Level, String)>>);

    impl Sink for Collect {
        fn emit(&self, record: &Record) -> io::Result<()> {
            self.0
                .lock()
                .unwrap()
                .push((record.level, record.message.clone()));
            Ok(())
        }
    }

    struct Failing;

    impl Sink for Failing {
        fn emit(&self, _record: &Record) -> io::Result<()> {
            Err(io::Error::other("sink down"))
        }
    }

    #[test]
    fn test_messages_below_level_are_dropped() {
        let logger = Logger::new("svc", Level::Warning);
        let sink = Arc::new(Collect::default());
        logger.add_sink(sink.clone());

        logger.debug("d");
        logger.info("i");
        logger.warning("w");
        logger.error("e");
        logger.critical("c");

        let seen = sink.0.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (Level::Warning, "w".to_string()),
                (Level::Error, "e".to_string()),
                (Level::Critical, "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_every_sink_receives_the_record_in_order() {
        let logger = Logger::new("svc", Level::Debug);
        let first = Arc::new(Collect::default());
        let second = Arc::new(Collect::default());
        logger.add_sink(first.clone());
        logger.add_sink(second.clone());

        logger.info("hello");

        assert_eq!(first.0.lock().unwrap().len(), 1);
        assert_eq!(second.0.lock().unwrap().len(), 1);
        assert_eq!(logger.sink_count(), 2);
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let logger = Logger::new("svc", Level::Debug);
        let collect = Arc::new(Collect::default());
        logger.add_sink(Arc::new(Failing));
        logger.add_sink(collect.clone());

        logger.error("still delivered");

        assert_eq!(collect.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_attach_if_empty_attaches_once() {
        let logger = Logger::new("svc", Level::Info);
        assert!(logger.attach_if_empty(|| Arc::new(Collect::default())));
        assert!(!logger.attach_if_empty(|| Arc::new(Collect::default())));
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_set_level_changes_filtering() {
        let logger = Logger::new("svc", Level::Error);
        assert!(!logger.is_enabled_for(Level::Info));
        logger.set_level(Level::Debug);
        assert!(logger.is_enabled_for(Level::Info));
        assert_eq!(logger.level(), Level::Debug);
    }
}
