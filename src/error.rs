//! Error types for gcview operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading or saving display configuration.
///
/// Lookups into a configuration never fail; unknown spaces and fields fall
/// back to default formatting instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file does not exist.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_display() {
        let err = Error::ConfigNotFound("/etc/gcview/view.json".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("view.json"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }
}
