//! Line formatting for log records
//!
//! Every sink writes the same uniform line:
//! `YYYY-MM-DD HH:MM:SS - LEVEL - name - message`, with traceback text (if
//! any) following on subsequent lines.

use super::record::LogRecord;

/// Default strftime pattern for record timestamps
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    timestamp_format: String,
}

impl LineFormat {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Set a custom timestamp pattern using a strftime-compatible string
    #[must_use]
    pub fn with_timestamp_format(mut self, format_str: &str) -> Self {
        self.timestamp_format = format_str.to_string();
        self
    }

    /// Format the record's timestamp alone
    #[must_use]
    pub fn timestamp(&self, record: &LogRecord) -> String {
        record.timestamp.format(&self.timestamp_format).to_string()
    }

    /// Format the single-line portion of a record
    #[must_use]
    pub fn line(&self, record: &LogRecord) -> String {
        format!(
            "{} - {} - {} - {}",
            self.timestamp(record),
            record.level.to_str(),
            record.logger,
            record.message
        )
    }

    /// Format the full record, appending traceback lines when present
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        match record.traceback {
            Some(ref traceback) => format!("{}\n{}", self.line(record), traceback),
            None => self.line(record),
        }
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new()
    }
}
