//! File sink implementation

use crate::core::{LineFormat, LogRecord, LoggingError, Result, Sink, SinkKind};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
    format: LineFormat,
}

impl FileSink {
    /// Open the file in append mode, creating it if missing
    ///
    /// An unwritable path surfaces here as an error; configuration callers
    /// propagate it with `?`.
    pub fn append(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggingError::file_sink(path.display().to_string(), e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            format: LineFormat::new(),
        })
    }

    /// Set the line format for this sink
    #[must_use]
    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let mut output = self.format.render(record);
        output.push('\n');
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches disk at process teardown
        let _ = self.flush();
    }
}
