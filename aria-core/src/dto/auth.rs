//! Authentication DTOs for the backend API

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/auth/apple`
///
/// Two uses: start a session (username/password only) or complete a
/// second-factor verification (session_id + verification_code).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Response body from the auth endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub requires_2fa: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    pub message: String,
}

/// The `detail` payload of a 428 response on the search endpoints
///
/// Signals that a verification code must be submitted for the carried
/// session before the original request can succeed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoFactorChallenge {
    pub message: String,
    pub session_id: String,
    #[serde(default)]
    pub requires_2fa: bool,
}

/// FastAPI-style error envelope wrapping the challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeEnvelope {
    pub detail: TwoFactorChallenge,
}
