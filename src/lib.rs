//! # App Logging
//!
//! A small logging facility: one configuration step attaches a console sink
//! and an optional append-mode file sink to a logging context, every record
//! is written with a uniform timestamped line format, and callers log through
//! named handles.
//!
//! ## Features
//!
//! - **Explicit context**: no global state; the [`LoggingContext`] is
//!   constructed by the caller and passed (or cheaply cloned) wherever
//!   logging is needed
//! - **Console and file sinks**: identical line format on both, file opened
//!   in append mode
//! - **Named handles**: acquire a [`LoggerHandle`] per component, including
//!   error logging with a captured traceback
//!
//! ## Quick start
//!
//! ```no_run
//! use app_logging::prelude::*;
//!
//! fn main() -> app_logging::Result<()> {
//!     let ctx = app_logging::setup::initialize(LogLevel::Debug, true)?;
//!     let logger = ctx.handle("main");
//!     logger.info("Application starting up.");
//!     ctx.flush()
//! }
//! ```

pub mod core;
pub mod macros;
pub mod setup;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LineFormat, LogLevel, LogRecord, LoggerHandle, LoggingContext, LoggingError, Result, Sink,
        SinkKind,
    };
    pub use crate::setup::{initialize, SetupOptions, DEFAULT_LOG_FILE};
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    LineFormat, LogLevel, LogRecord, LoggerHandle, LoggingContext, LoggingError, Result, Sink,
    SinkKind,
};
pub use setup::{initialize, SetupOptions, DEFAULT_LOG_FILE};
pub use sinks::{ConsoleSink, FileSink};
