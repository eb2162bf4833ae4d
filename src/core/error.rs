//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggingError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File sink error with path
    #[error("file sink error for '{path}': {source}")]
    FileSink {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer error (generic)
    #[error("writer error: {0}")]
    Writer(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggingError {
    /// Create a file sink error carrying the offending path
    pub fn file_sink(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggingError::FileSink {
            path: path.into(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggingError::Writer(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggingError::Other(msg.into())
    }
}
