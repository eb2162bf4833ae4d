//! Core types: levels, records, formatting, the sink trait, and the context

pub mod context;
pub mod error;
pub mod format;
pub mod log_level;
pub mod record;
pub mod sink;

pub use context::{LoggerHandle, LoggingContext};
pub use error::{LoggingError, Result};
pub use format::LineFormat;
pub use log_level::LogLevel;
pub use record::LogRecord;
pub use sink::{Sink, SinkKind};
