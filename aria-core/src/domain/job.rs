//! Job domain types

use serde::{Deserialize, Serialize};

/// Download job record
///
/// Owned entirely by the backend; the client renders snapshots of it and
/// never merges or diffs state locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Opaque job identifier assigned by the backend
    pub job_id: String,
    pub job_type: JobType,
    pub url: String,
    pub platform: String,
    #[serde(default)]
    pub formats: Vec<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub status: JobStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub error_message: Option<String>,
    /// Completion percentage, when the backend reports one
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub file_paths: Vec<String>,
    #[serde(default)]
    pub logs_count: usize,
}

impl Job {
    /// First eight characters of the id, the form shown in listings
    pub fn short_id(&self) -> &str {
        let end = self
            .job_id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.job_id.len());
        &self.job_id[..end]
    }
}

/// Job execution status
///
/// Canonical vocabulary. The backend's drafts disagreed between `pending`
/// and `queued`; `queued` is canonical and `pending` is accepted as an
/// alias when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[serde(alias = "pending")]
    Queued,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl JobStatus {
    /// Whether the job is still queued or executing
    pub fn is_active(&self) -> bool {
        matches!(self, JobStatus::Queued | JobStatus::Running)
    }

    /// Whether the job has reached a final state
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Uppercase label used in status badges
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Queued => "QUEUED",
            JobStatus::Running => "RUNNING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
            JobStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Kind of download a job performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    TrackDownload,
    AlbumDownload,
}

impl JobType {
    /// Uppercase label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            JobType::TrackDownload => "TRACK DOWNLOAD",
            JobType::AlbumDownload => "ALBUM DOWNLOAD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_json(status: &str) -> String {
        format!(
            r#"{{
                "job_id": "abc12345-0000-0000-0000-000000000000",
                "job_type": "track_download",
                "url": "https://tidal.com/browse/track/1",
                "platform": "tidal",
                "status": "{status}",
                "created_at": "2024-01-01T00:00:00Z"
            }}"#
        )
    }

    #[test]
    fn test_deserialize_minimal_job() {
        let job: Job = serde_json::from_str(&job_json("queued")).unwrap();
        assert_eq!(job.status, JobStatus::Queued);
        assert_eq!(job.job_type, JobType::TrackDownload);
        assert!(job.started_at.is_none());
        assert!(job.file_paths.is_empty());
        assert_eq!(job.logs_count, 0);
    }

    #[test]
    fn test_pending_is_alias_for_queued() {
        let job: Job = serde_json::from_str(&job_json("pending")).unwrap();
        assert_eq!(job.status, JobStatus::Queued);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&JobStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_status_activity() {
        assert!(JobStatus::Queued.is_active());
        assert!(JobStatus::Running.is_active());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_short_id() {
        let job: Job = serde_json::from_str(&job_json("running")).unwrap();
        assert_eq!(job.short_id(), "abc12345");
    }
}
