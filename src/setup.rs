//! One-call logging setup
//!
//! [`initialize`] mirrors the classic "configure the logger once at startup"
//! entry point: it sets the severity threshold, attaches a console sink and
//! optionally an append-mode file sink, and prints one confirmation line.
//! [`SetupOptions`] is the parameterized form; re-applying it to the same
//! context is idempotent and never duplicates sinks.

use crate::core::{LogLevel, LoggingContext, Result};
use crate::sinks::{ConsoleSink, FileSink};
use std::path::PathBuf;

/// Default relative path for the file sink
pub const DEFAULT_LOG_FILE: &str = "app_activity.log";

#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub min_level: LogLevel,
    pub file_output: bool,
    pub file_path: PathBuf,
}

impl SetupOptions {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            file_output: true,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// Set the minimum severity to log
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Enable or disable the file sink
    #[must_use]
    pub fn with_file_output(mut self, enabled: bool) -> Self {
        self.file_output = enabled;
        self
    }

    /// Set the file sink path (defaults to [`DEFAULT_LOG_FILE`])
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Configure the given context according to these options
    ///
    /// Removes all currently attached sinks first, then attaches a console
    /// sink and, when enabled, a file sink. Safe to call repeatedly on the
    /// same context. A file-open failure propagates and leaves the context
    /// with no sinks attached.
    pub fn apply(&self, context: &LoggingContext) -> Result<()> {
        context.set_min_level(self.min_level);
        context.clear_sinks();

        let file_sink = if self.file_output {
            Some(FileSink::append(&self.file_path)?)
        } else {
            None
        };

        context.attach(Box::new(ConsoleSink::new()));
        if let Some(sink) = file_sink {
            context.attach(Box::new(sink));
        }

        println!(
            "Logger set up. Messages being written to console and file: {}",
            self.file_output
        );
        Ok(())
    }
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a freshly configured [`LoggingContext`]
///
/// Convenience wrapper over [`SetupOptions::apply`] using the default file
/// path.
pub fn initialize(min_level: LogLevel, file_output: bool) -> Result<LoggingContext> {
    let context = LoggingContext::new();
    SetupOptions::new()
        .with_min_level(min_level)
        .with_file_output(file_output)
        .apply(&context)?;
    Ok(context)
}
