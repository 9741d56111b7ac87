//! Job-related API endpoints

use async_trait::async_trait;
use tracing::debug;

use crate::BackendClient;
use crate::error::Result;
use aria_core::domain::job::Job;
use aria_core::domain::log::LogEntry;
use aria_core::dto::job::{ApiMessage, JobList, JobLogs, RetryReceipt};

/// The job queue operations the CLI depends on
///
/// The poller and control actions take this trait rather than a concrete
/// client so they can be exercised against in-memory fakes.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// List all jobs
    async fn list_jobs(&self) -> Result<Vec<Job>>;

    /// Get a job by ID
    async fn get_job(&self, job_id: &str) -> Result<Job>;

    /// Get the current log snapshot for a job
    async fn get_job_logs(&self, job_id: &str) -> Result<Vec<LogEntry>>;

    /// Request cancellation of a job
    async fn cancel_job(&self, job_id: &str) -> Result<()>;

    /// Retry a failed job; the backend creates a fresh job
    async fn retry_job(&self, job_id: &str) -> Result<RetryReceipt>;

    /// Remove a job from the backend's list
    async fn remove_job(&self, job_id: &str) -> Result<()>;

    /// Clear all completed and failed jobs
    async fn clear_completed(&self) -> Result<ApiMessage>;
}

#[async_trait]
impl JobsApi for BackendClient {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let url = format!("{}/api/jobs", self.base_url);
        debug!(%url, "listing jobs");
        let response = self.client.get(&url).send().await?;

        let list: JobList = self.handle_response(response).await?;
        Ok(list.jobs)
    }

    async fn get_job(&self, job_id: &str) -> Result<Job> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    async fn get_job_logs(&self, job_id: &str) -> Result<Vec<LogEntry>> {
        let url = format!("{}/api/jobs/{}/logs", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        let logs: JobLogs = self.handle_response(response).await?;
        Ok(logs.logs)
    }

    async fn cancel_job(&self, job_id: &str) -> Result<()> {
        let url = format!("{}/api/jobs/{}/cancel", self.base_url, job_id);
        debug!(%job_id, "requesting cancel");
        let response = self.client.post(&url).send().await?;

        let _: ApiMessage = self.handle_response(response).await?;
        Ok(())
    }

    async fn retry_job(&self, job_id: &str) -> Result<RetryReceipt> {
        let url = format!("{}/api/jobs/{}/retry", self.base_url, job_id);
        debug!(%job_id, "requesting retry");
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }

    async fn remove_job(&self, job_id: &str) -> Result<()> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        debug!(%job_id, "requesting removal");
        let response = self.client.delete(&url).send().await?;

        let _: ApiMessage = self.handle_response(response).await?;
        Ok(())
    }

    async fn clear_completed(&self) -> Result<ApiMessage> {
        let url = format!("{}/api/jobs/clear-completed", self.base_url);
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }
}

impl BackendClient {
    /// List jobs for a single user
    ///
    /// The backend filters server-side via the `user_id` query parameter.
    pub async fn list_jobs_for_user(&self, user_id: &str) -> Result<Vec<Job>> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;

        let list: JobList = self.handle_response(response).await?;
        Ok(list.jobs)
    }
}
