//! Crate-wide error types
//!
//! A single `thiserror` enum covers every fallible path in the crate.
//! Retrieval itself never returns these to callers: [`MockDataProvider`]
//! folds them into an error-indicator response instead.
//!
//! [`MockDataProvider`]: crate::mock_data::MockDataProvider

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Resource tag outside the supported set
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// API path that does not map onto any resource
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convert AppError to String for display layers that only carry messages
impl From<AppError> for String {
    fn from(error: AppError) -> String {
        error.to_string()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
