//! Error handling for the medlink engine.

use thiserror::Error;

/// Specialized error type for the extraction and correlation engine
#[derive(Debug, Error)]
pub enum MedLinkError {
    /// Malformed input shape (out-of-range coordinates, confidences, pages)
    #[error("validation error: {0}")]
    Validation(String),
    /// Out-of-range or inconsistent configuration values
    #[error("configuration error: {0}")]
    Config(String),
}

impl MedLinkError {
    /// Create a validation error from any message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error from any message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for medlink operations
pub type Result<T> = std::result::Result<T, MedLinkError>;
