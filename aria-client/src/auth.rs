//! Authentication endpoint

use tracing::debug;

use crate::BackendClient;
use crate::error::Result;
use aria_core::dto::auth::{AuthRequest, AuthResponse};

impl BackendClient {
    /// Authenticate against the backend
    ///
    /// Two call shapes: username/password to start a session, or session_id
    /// plus verification_code to complete a second-factor challenge.
    pub async fn authenticate(&self, req: &AuthRequest) -> Result<AuthResponse> {
        let url = format!("{}/api/auth/apple", self.base_url);
        debug!(
            completing_2fa = req.verification_code.is_some(),
            "authenticating"
        );
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }
}
