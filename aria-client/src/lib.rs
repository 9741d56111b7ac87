//! Aria HTTP Client
//!
//! A type-safe HTTP client for the Aria download backend API.
//!
//! The backend owns all job state; this crate exposes the full HTTP
//! contract the CLI depends on: the job queue, search, download submission,
//! and the second-factor authentication flow.
//!
//! # Example
//!
//! ```no_run
//! use aria_client::{BackendClient, JobsApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aria_client::ClientError> {
//!     let client = BackendClient::new("http://localhost:8000");
//!
//!     for job in client.list_jobs().await? {
//!         println!("{} {:?}", job.short_id(), job.status);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

mod auth;
mod jobs;
mod search;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use jobs::JobsApi;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Aria backend API
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle a response from the search endpoints
    ///
    /// Like [`handle_response`], but a 428 status carries a second-factor
    /// challenge in its `detail` payload and is mapped to
    /// [`ClientError::TwoFactorRequired`].
    pub(crate) async fn handle_search_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.as_u16() == 428 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return match serde_json::from_str::<aria_core::dto::auth::ChallengeEnvelope>(&body) {
                Ok(envelope) => Err(ClientError::TwoFactorRequired {
                    session_id: envelope.detail.session_id,
                    message: envelope.detail.message,
                }),
                Err(_) => Err(ClientError::api_error(428, body)),
            };
        }

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BackendClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = BackendClient::with_client("http://localhost:8000", http_client);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
