//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for logging through a
//! [`crate::LoggerHandle`] with automatic string formatting, similar to
//! `println!` and `format!`.
//!
//! # Examples
//!
//! ```no_run
//! use app_logging::prelude::*;
//! use app_logging::info;
//!
//! # fn main() -> app_logging::Result<()> {
//! let ctx = app_logging::setup::initialize(LogLevel::Info, false)?;
//! let logger = ctx.handle("server");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! # Ok(())
//! # }
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use app_logging::prelude::*;
/// # let ctx = LoggingContext::new();
/// # let logger = ctx.handle("main");
/// use app_logging::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
