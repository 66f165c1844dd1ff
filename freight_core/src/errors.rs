//! # Error Types
//!
//! Structured error types for freight_core. Only operational failures are
//! errors here: storage, file, rendering and configuration problems.
//! Incomplete measurement input is not an error, it is the `None` result
//! of [`crate::density::compute`].
//!
//! ## Example
//!
//! ```rust
//! use freight_core::errors::{FreightError, FreightResult};
//!
//! fn require_label(label: &str) -> FreightResult<()> {
//!     if label.trim().is_empty() {
//!         return Err(FreightError::invalid_input(
//!             "file_label",
//!             label,
//!             "Label must not be blank",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_label("  ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for freight_core operations
pub type FreightResult<T> = Result<T, FreightError>;

/// Structured error type for freight_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FreightError {
    /// An input value is invalid for an operation that requires it
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Key-value store read or write failed
    #[error("Storage error: {operation} '{key}' - {reason}")]
    StorageError {
        operation: String,
        key: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Report layout or PDF compilation failed
    #[error("Render error: {stage} - {reason}")]
    RenderError { stage: String, reason: String },

    /// Configuration file could not be read or parsed
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FreightError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FreightError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FreightError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a StorageError
    pub fn storage_error(operation: impl Into<String>, key: impl Into<String>, reason: impl Into<String>) -> Self {
        FreightError::StorageError {
            operation: operation.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        FreightError::SerializationError { reason: reason.into() }
    }

    /// Create a RenderError
    pub fn render_error(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        FreightError::RenderError {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FreightError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        FreightError::Internal { message: message.into() }
    }

    /// Storage and file failures are transient; the next write may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FreightError::StorageError { .. } | FreightError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FreightError::InvalidInput { .. } => "INVALID_INPUT",
            FreightError::FileError { .. } => "FILE_ERROR",
            FreightError::StorageError { .. } => "STORAGE_ERROR",
            FreightError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FreightError::RenderError { .. } => "RENDER_ERROR",
            FreightError::ConfigError { .. } => "CONFIG_ERROR",
            FreightError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for FreightError {
    fn from(e: serde_json::Error) -> Self {
        FreightError::serialization(e.to_string())
    }
}
