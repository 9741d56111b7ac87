//! Job control actions
//!
//! Each action issues one mutating request and, on success, exactly one
//! fetch-and-render refresh. Declining a confirmation prompt is a no-op,
//! not an error. Mutating failures are returned to the caller and never
//! auto-retried; the displayed list stays as it was until the next poll.

use aria_client::error::Result;
use aria_client::JobsApi;
use aria_core::dto::job::{ApiMessage, RetryReceipt};

use crate::poller::refresh_jobs;
use crate::prompt::Confirm;
use crate::view::JobListView;

/// What a control action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The mutating request succeeded and the list was refreshed
    Completed,
    /// The user declined the confirmation prompt
    Declined,
}

/// Request cancellation of a job
pub async fn cancel_job(
    client: &dyn JobsApi,
    view: &dyn JobListView,
    confirm: &dyn Confirm,
    job_id: &str,
) -> Result<ActionOutcome> {
    if !confirm.confirm(&format!("Cancel job {}?", job_id)) {
        return Ok(ActionOutcome::Declined);
    }

    client.cancel_job(job_id).await?;
    refresh_jobs(client, view).await;
    Ok(ActionOutcome::Completed)
}

/// Retry a failed job
///
/// No confirmation; retrying is not destructive. Returns the backend's
/// receipt so the caller can surface the new job id.
pub async fn retry_job(
    client: &dyn JobsApi,
    view: &dyn JobListView,
    job_id: &str,
) -> Result<RetryReceipt> {
    let receipt = client.retry_job(job_id).await?;
    refresh_jobs(client, view).await;
    Ok(receipt)
}

/// Remove a job from the backend's list
pub async fn remove_job(
    client: &dyn JobsApi,
    view: &dyn JobListView,
    confirm: &dyn Confirm,
    job_id: &str,
) -> Result<ActionOutcome> {
    if !confirm.confirm(&format!("Remove job {}?", job_id)) {
        return Ok(ActionOutcome::Declined);
    }

    client.remove_job(job_id).await?;
    refresh_jobs(client, view).await;
    Ok(ActionOutcome::Completed)
}

/// Clear all completed and failed jobs
pub async fn clear_completed_jobs(
    client: &dyn JobsApi,
    view: &dyn JobListView,
    confirm: &dyn Confirm,
) -> Result<Option<ApiMessage>> {
    if !confirm.confirm("Clear all completed jobs?") {
        return Ok(None);
    }

    let receipt = client.clear_completed().await?;
    refresh_jobs(client, view).await;
    Ok(Some(receipt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::JobGroups;
    use aria_client::error::ClientError;
    use aria_core::domain::job::Job;
    use aria_core::domain::log::LogEntry;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every API call in order
    #[derive(Default)]
    struct RecordingApi {
        ops: Mutex<Vec<String>>,
        fail_mutations: bool,
    }

    impl RecordingApi {
        fn ops(&self) -> Vec<String> {
            self.ops.lock().unwrap().clone()
        }

        fn record(&self, op: String) {
            self.ops.lock().unwrap().push(op);
        }
    }

    #[async_trait]
    impl JobsApi for RecordingApi {
        async fn list_jobs(&self) -> aria_client::error::Result<Vec<Job>> {
            self.record("list".to_string());
            Ok(vec![])
        }

        async fn get_job(&self, _job_id: &str) -> aria_client::error::Result<Job> {
            unimplemented!("not used by actions")
        }

        async fn get_job_logs(
            &self,
            _job_id: &str,
        ) -> aria_client::error::Result<Vec<LogEntry>> {
            unimplemented!("not used by actions")
        }

        async fn cancel_job(&self, job_id: &str) -> aria_client::error::Result<()> {
            if self.fail_mutations {
                return Err(ClientError::api_error(404, "Job not found"));
            }
            self.record(format!("cancel {}", job_id));
            Ok(())
        }

        async fn retry_job(&self, job_id: &str) -> aria_client::error::Result<RetryReceipt> {
            self.record(format!("retry {}", job_id));
            Ok(RetryReceipt {
                message: "Job retry started".to_string(),
                new_job_id: "def67890".to_string(),
            })
        }

        async fn remove_job(&self, job_id: &str) -> aria_client::error::Result<()> {
            self.record(format!("remove {}", job_id));
            Ok(())
        }

        async fn clear_completed(&self) -> aria_client::error::Result<ApiMessage> {
            self.record("clear".to_string());
            Ok(ApiMessage {
                message: "Cleared 2 completed jobs".to_string(),
            })
        }
    }

    struct NullView;

    impl JobListView for NullView {
        fn show_jobs(&self, _groups: &JobGroups) {}
        fn show_error(&self, _message: &str) {}
    }

    struct Accept;
    struct Decline;

    impl Confirm for Accept {
        fn confirm(&self, _prompt: &str) -> bool {
            true
        }
    }

    impl Confirm for Decline {
        fn confirm(&self, _prompt: &str) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_cancel_issues_request_then_one_refresh() {
        let api = RecordingApi::default();

        let outcome = cancel_job(&api, &NullView, &Accept, "abc12345")
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(api.ops(), vec!["cancel abc12345", "list"]);
    }

    #[tokio::test]
    async fn test_declined_cancel_is_a_noop() {
        let api = RecordingApi::default();

        let outcome = cancel_job(&api, &NullView, &Decline, "abc12345")
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Declined);
        assert!(api.ops().is_empty());
    }

    #[tokio::test]
    async fn test_failed_cancel_skips_refresh() {
        let api = RecordingApi {
            fail_mutations: true,
            ..Default::default()
        };

        let result = cancel_job(&api, &NullView, &Accept, "abc12345").await;

        assert!(result.is_err());
        assert!(api.ops().is_empty());
    }

    #[tokio::test]
    async fn test_retry_needs_no_confirmation() {
        let api = RecordingApi::default();

        let receipt = retry_job(&api, &NullView, "abc12345").await.unwrap();

        assert_eq!(receipt.new_job_id, "def67890");
        assert_eq!(api.ops(), vec!["retry abc12345", "list"]);
    }

    #[tokio::test]
    async fn test_remove_then_refresh() {
        let api = RecordingApi::default();

        let outcome = remove_job(&api, &NullView, &Accept, "abc12345")
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(api.ops(), vec!["remove abc12345", "list"]);
    }

    #[tokio::test]
    async fn test_clear_completed_reports_receipt() {
        let api = RecordingApi::default();

        let receipt = clear_completed_jobs(&api, &NullView, &Accept)
            .await
            .unwrap();

        assert_eq!(
            receipt.unwrap().message,
            "Cleared 2 completed jobs"
        );
        assert_eq!(api.ops(), vec!["clear", "list"]);
    }

    #[tokio::test]
    async fn test_declined_clear_returns_none() {
        let api = RecordingApi::default();

        let receipt = clear_completed_jobs(&api, &NullView, &Decline)
            .await
            .unwrap();

        assert!(receipt.is_none());
        assert!(api.ops().is_empty());
    }
}
