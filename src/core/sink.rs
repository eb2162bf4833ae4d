//! Sink trait for log output destinations

use super::{error::Result, record::LogRecord};

/// Kind of output destination a sink writes to
///
/// A context keeps at most one sink of each kind; attaching a second one
/// replaces the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

pub trait Sink: Send + Sync {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn kind(&self) -> SinkKind;
    fn name(&self) -> &str;
}
