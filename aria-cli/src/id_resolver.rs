//! ID resolver module
//!
//! Job ids are opaque uuid-shaped strings, and listings habitually show
//! only their first eight characters. This module resolves a short,
//! unambiguous prefix back to a full id by querying the job list.

use anyhow::{Context, Result, anyhow};

use aria_client::JobsApi;
use aria_core::domain::job::Job;

/// Resolve a job id or prefix to a full id
///
/// An exact match wins; otherwise the prefix must match exactly one job.
///
/// # Errors
/// Returns an error if:
/// - No job matches the prefix
/// - Multiple jobs match the prefix (ambiguous)
/// - The API call fails
pub async fn resolve_job_id(client: &dyn JobsApi, id_or_prefix: &str) -> Result<String> {
    let jobs = client
        .list_jobs()
        .await
        .context("Failed to fetch jobs for ID resolution")?;

    match_job_id(&jobs, id_or_prefix)
}

/// Match an id or prefix against a job snapshot
fn match_job_id(jobs: &[Job], id_or_prefix: &str) -> Result<String> {
    if jobs.iter().any(|j| j.job_id == id_or_prefix) {
        return Ok(id_or_prefix.to_string());
    }

    let prefix = id_or_prefix.to_lowercase();
    let matches: Vec<_> = jobs
        .iter()
        .filter(|j| j.job_id.to_lowercase().starts_with(&prefix))
        .collect();

    match matches.len() {
        0 => Err(anyhow!("No job found with ID starting with '{}'", prefix)),
        1 => Ok(matches[0].job_id.clone()),
        _ => {
            let ids: Vec<String> = matches.iter().map(|j| j.job_id.clone()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple jobs: {}",
                prefix,
                ids.join(", ")
            ))
        }
    }
}
