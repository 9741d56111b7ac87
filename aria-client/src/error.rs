//! Error types for the Aria backend client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend returned a non-2xx status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the backend
        message: String,
    },

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A 428 on a search endpoint: a verification code is required for
    /// this session before the request can be retried
    #[error("Second-factor verification required: {message}")]
    TwoFactorRequired {
        /// Session identifier to echo back on the verification call
        session_id: String,
        /// Message from the backend describing the challenge
        message: String,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}
