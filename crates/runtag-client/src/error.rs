//! Error types for the run tracker client.

use thiserror::Error;

/// Errors that can occur when talking to the run tracker.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP {status}: {path}")]
    Status { status: u16, path: String },

    /// Base URL cannot address the tracker endpoints.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
