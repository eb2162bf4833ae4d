//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::backtrace::Backtrace;
use std::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub logger: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so every record occupies a single line. Traceback text is the only
    /// multi-line block a record may carry.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            logger: logger.into(),
            message: Self::sanitize_message(&message.into()),
            timestamp: Local::now(),
            traceback: None,
        }
    }

    pub fn with_traceback(mut self, traceback: impl Into<String>) -> Self {
        self.traceback = Some(traceback.into());
        self
    }

    /// Attach a traceback rendered from the given error
    pub fn with_error<E: Error>(self, error: &E) -> Self {
        self.with_traceback(render_traceback(error))
    }
}

/// Render an error as a multi-line traceback block
///
/// The first line names the concrete error type and its display message,
/// followed by one `caused by:` line per source in the chain and the
/// captured backtrace frames.
pub fn render_traceback<E: Error>(error: &E) -> String {
    let mut out = format!("{}: {}", std::any::type_name::<E>(), error);

    let mut cause = error.source();
    while let Some(err) = cause {
        out.push_str("\ncaused by: ");
        out.push_str(&err.to_string());
        cause = err.source();
    }

    out.push('\n');
    out.push_str(Backtrace::force_capture().to_string().trim_end());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct DivisionByZero;

    impl fmt::Display for DivisionByZero {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "attempted to divide by zero")
        }
    }

    impl Error for DivisionByZero {}

    #[test]
    fn test_message_sanitization() {
        let record = LogRecord::new(
            LogLevel::Info,
            "test",
            "User login\nERROR fake entry\ttab",
        );
        assert!(!record.message.contains('\n'));
        assert!(record.message.contains("\\n"));
        assert!(record.message.contains("\\t"));
    }

    #[test]
    fn test_traceback_names_error_type() {
        let tb = render_traceback(&DivisionByZero);
        assert!(tb.contains("DivisionByZero"));
        assert!(tb.contains("attempted to divide by zero"));
        assert!(tb.lines().count() > 1, "traceback should span multiple lines");
    }

    #[test]
    fn test_with_error_attaches_traceback() {
        let record =
            LogRecord::new(LogLevel::Error, "test", "calculation failed").with_error(&DivisionByZero);
        let tb = record.traceback.expect("traceback attached");
        assert!(tb.starts_with(std::any::type_name::<DivisionByZero>()));
    }
}
