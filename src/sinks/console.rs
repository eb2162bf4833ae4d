//! Console sink implementation

use crate::core::{LineFormat, LogRecord, Result, Sink, SinkKind};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;

pub struct ConsoleSink {
    target: Mutex<Box<dyn Write + Send>>,
    format: LineFormat,
    use_colors: bool,
}

impl ConsoleSink {
    /// Create a console sink bound to standard output
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    /// Create a console sink writing to an arbitrary target
    ///
    /// Used by tests and embedders that capture console output.
    #[must_use]
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            target: Mutex::new(writer),
            format: LineFormat::new(),
            use_colors: false,
        }
    }

    /// Enable or disable per-level colors on the severity token
    ///
    /// Colors are off by default so console output stays byte-identical to
    /// the file sink's.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the line format for this sink
    #[must_use]
    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    fn format_colored(&self, record: &LogRecord) -> String {
        let line = format!(
            "{} - {} - {} - {}",
            self.format.timestamp(record),
            record.level.to_str().color(record.level.color_code()),
            record.logger,
            record.message
        );
        match record.traceback {
            Some(ref traceback) => format!("{}\n{}", line, traceback),
            None => line,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let output = if self.use_colors {
            self.format_colored(record)
        } else {
            self.format.render(record)
        };

        let mut target = self.target.lock();
        target.write_all(output.as_bytes())?;
        target.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.target.lock().flush()?;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn name(&self) -> &str {
        "console"
    }
}
