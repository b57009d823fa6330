//! Error types module.
//!
//! Only setup failures are errors here: an unreadable or invalid host
//! configuration, or a log directory that cannot be written. Anything that
//! goes wrong while pinging a single host is folded into that host's raw
//! output and never surfaces as an `Error`.

use thiserror::Error;

/// A specialized `Result` type for pingcheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the pingcheck application.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (log directory creation, log file writes, config reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a host configuration file
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (duplicate host names, incomplete display order)
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("duplicate host name: Router");
        assert_eq!(err.to_string(), "Config error: duplicate host name: Router");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
