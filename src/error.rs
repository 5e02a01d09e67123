//! Custom error types for Backuper
//!
//! The two operation failures a host cares about are `Access` (the entry
//! could not be inspected) and `Copy` (duplication failed). The remaining
//! variants cover the configuration and operation-log layers.

use std::path::PathBuf;

use thiserror::Error;

use crate::audit::Operation;

/// The main error type for Backuper operations
#[derive(Error, Debug)]
pub enum BackuperError {
    /// The source entry could not be stat'ed (missing, permission denied, broken link)
    #[error("Error accessing {}: {message}", .path.display())]
    Access { path: PathBuf, message: String },

    /// Duplicating the entry failed; partial writes are left in place
    #[error("{operation} failed: {message}")]
    Copy {
        operation: Operation,
        message: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside of a backup/restore copy
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BackuperError {
    /// Create an access error for the given path
    pub fn access(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Access {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a copy error for the given operation
    pub fn copy(operation: Operation, message: impl Into<String>) -> Self {
        Self::Copy {
            operation,
            message: message.into(),
        }
    }

    /// Check if this is an access error
    pub fn is_access(&self) -> bool {
        matches!(self, Self::Access { .. })
    }

    /// Check if this is a copy error
    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Copy { .. })
    }
}

impl From<std::io::Error> for BackuperError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BackuperError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Backuper operations
pub type BackuperResult<T> = Result<T, BackuperError>;
