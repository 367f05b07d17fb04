//! Error types for finledger-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Store file contents are not valid JSON
    ParseError,
    /// Failed to serialize the collection
    SerializeError,
    /// IO error
    IoError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::SerializeError => write!(f, "SERIALIZE_ERROR"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Core error type for the transaction store
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Serialize error: {message}")]
    SerializeError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::SerializeError { .. } => ErrorCode::SerializeError,
            CoreError::IoError { .. } => ErrorCode::IoError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A corrupt store file cannot be recovered without operator action
            CoreError::ParseError { .. } => ErrorSeverity::Critical,
            CoreError::SerializeError { .. } => ErrorSeverity::Error,
            CoreError::IoError { .. } => ErrorSeverity::Error,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::IoError {
            message: e.to_string(),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
