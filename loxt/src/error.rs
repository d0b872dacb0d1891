//! Error handling module for the loxt CLI.
//!
//! Host-level failures only. Lexical errors in the scanned program are not
//! errors of the tool: they are printed as diagnostics and mapped to an exit
//! status by the commands.

use thiserror::Error;

/// Main error type for the loxt CLI application.
#[derive(Error, Debug)]
pub enum LoxtError {
    /// Configuration could not be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LoxtError.
pub type Result<T> = std::result::Result<T, LoxtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LoxtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = LoxtError::FileOperation("cannot read 'a.lox'".to_string());
        assert_eq!(err.to_string(), "File operation failed: cannot read 'a.lox'");
    }

    #[test]
    fn test_logging_error_display() {
        let err = LoxtError::Logging("already set".to_string());
        assert_eq!(err.to_string(), "Logging error: already set");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let loxt_err: LoxtError = io_err.into();
        assert!(matches!(loxt_err, LoxtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let loxt_err: LoxtError = json_err.into();
        assert!(matches!(loxt_err, LoxtError::Json(_)));
    }
}
