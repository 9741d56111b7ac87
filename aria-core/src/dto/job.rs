//! Job DTOs for the backend API

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;
use crate::domain::log::LogEntry;

/// Body of `GET /api/jobs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobList {
    pub jobs: Vec<Job>,
}

/// Body of `GET /api/jobs/{id}/logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobLogs {
    pub job_id: String,
    pub logs: Vec<LogEntry>,
}

/// Generic `{"message": ...}` acknowledgement from mutating endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Body of `POST /api/jobs/{id}/retry`
///
/// A retry creates a fresh job; the old one keeps its failed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryReceipt {
    pub message: String,
    pub new_job_id: String,
}

/// 202 body returned when a download job is accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAccepted {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

/// Request to submit a download job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub platform: String,
    /// "track" or "album"
    #[serde(rename = "type")]
    pub kind: String,
}
