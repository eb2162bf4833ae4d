//! Logging context and named handles

use super::{
    error::Result,
    log_level::LogLevel,
    record::{render_traceback, LogRecord},
    sink::{Sink, SinkKind},
};
use parking_lot::RwLock;
use std::error::Error;
use std::sync::Arc;

/// Explicitly constructed logging context owning the severity threshold and
/// an ordered list of sinks
///
/// The context replaces a process-wide logger singleton: the caller builds
/// it, configures it (see [`crate::setup`]), and passes clones wherever
/// logging is needed. Clones share the same threshold and sinks.
#[derive(Clone)]
pub struct LoggingContext {
    min_level: Arc<RwLock<LogLevel>>,
    sinks: Arc<RwLock<Vec<Box<dyn Sink>>>>,
}

impl LoggingContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Arc::new(RwLock::new(LogLevel::Info)),
            sinks: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Attach a sink, replacing any existing sink of the same kind
    ///
    /// Keeps the context at no more than one console and one file sink, so
    /// reconfiguring never produces duplicate output lines.
    pub fn attach(&self, sink: Box<dyn Sink>) {
        let mut sinks = self.sinks.write();
        sinks.retain(|existing| existing.kind() != sink.kind());
        sinks.push(sink);
    }

    /// Remove all attached sinks
    pub fn clear_sinks(&self) {
        self.sinks.write().clear();
    }

    #[must_use]
    pub fn has_sink(&self, kind: SinkKind) -> bool {
        self.sinks.read().iter().any(|sink| sink.kind() == kind)
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// Acquire a named logger handle bound to this context
    #[must_use]
    pub fn handle(&self, name: impl Into<String>) -> LoggerHandle {
        LoggerHandle {
            name: name.into(),
            context: self.clone(),
        }
    }

    pub fn log(&self, level: LogLevel, logger: impl Into<String>, message: impl Into<String>) {
        if level < self.min_level() {
            return;
        }
        self.dispatch(LogRecord::new(level, logger, message));
    }

    /// Write a fully built record, subject to the severity threshold
    pub fn log_record(&self, record: LogRecord) {
        if record.level < self.min_level() {
            return;
        }
        self.dispatch(record);
    }

    /// Fan a record out to every sink
    ///
    /// A failing sink is reported to stderr and does not prevent the
    /// remaining sinks from receiving the record.
    fn dispatch(&self, record: LogRecord) {
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            if let Err(e) = sink.write(&record) {
                eprintln!("[LOGGING ERROR] sink '{}' failed: {}", sink.name(), e);
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Named front-end to a [`LoggingContext`]
///
/// Handles are cheap to create and clone; each log call stamps the handle's
/// name into the record.
#[derive(Clone)]
pub struct LoggerHandle {
    name: String,
    context: LoggingContext,
}

impl LoggerHandle {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.context.log(level, self.name.clone(), message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }

    /// Log a caught error at `Error` level with a rendered traceback
    ///
    /// The traceback names the concrete error type, its display message, the
    /// source chain, and the captured backtrace, on lines following the
    /// formatted record.
    pub fn exception<E: Error>(&self, message: impl Into<String>, error: &E) {
        let record = LogRecord::new(LogLevel::Error, self.name.clone(), message)
            .with_traceback(render_traceback(error));
        self.context.log_record(record);
    }
}
