//! Client error types

use shared::error::ApiError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error envelope or status
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client misconfiguration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the error is a (member, event) uniqueness conflict
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, ClientError::Api(e) if e.is_unique_violation())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
