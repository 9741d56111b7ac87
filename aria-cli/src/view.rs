//! Job list rendering
//!
//! Partitioning and time text are pure functions; actual output goes
//! through the [`JobListView`] trait so the poller and action handlers can
//! be tested without a terminal. Every render is a full replacement of the
//! previous one.

use chrono::{DateTime, Utc};
use colored::*;

use aria_core::domain::job::{Job, JobStatus};
use aria_core::domain::log::{LogEntry, LogLevel};

/// Jobs partitioned into display groups
#[derive(Debug, Clone, Default)]
pub struct JobGroups {
    /// Queued and running jobs, rendered first
    pub active: Vec<Job>,
    pub completed: Vec<Job>,
    /// Failed and cancelled jobs
    pub failed: Vec<Job>,
}

impl JobGroups {
    pub fn total(&self) -> usize {
        self.active.len() + self.completed.len() + self.failed.len()
    }

    pub fn has_terminal_jobs(&self) -> bool {
        !self.completed.is_empty() || !self.failed.is_empty()
    }
}

/// Partition jobs into display groups, preserving relative order
pub fn partition_jobs(jobs: Vec<Job>) -> JobGroups {
    let mut groups = JobGroups::default();

    for job in jobs {
        match job.status {
            JobStatus::Queued | JobStatus::Running => groups.active.push(job),
            JobStatus::Completed => groups.completed.push(job),
            JobStatus::Failed | JobStatus::Cancelled => groups.failed.push(job),
        }
    }

    groups
}

/// Relative time text for a job
///
/// Whole minutes, matching what the backend's timestamps can support.
pub fn time_info(job: &Job, now: DateTime<Utc>) -> String {
    if let Some(completed) = job.completed_at {
        let minutes = completed.signed_duration_since(job.created_at).num_minutes();
        format!("Completed in {}m", minutes)
    } else if job.started_at.is_some() {
        let minutes = now.signed_duration_since(job.created_at).num_minutes();
        format!("Running for {}m", minutes)
    } else {
        let minutes = now.signed_duration_since(job.created_at).num_minutes();
        format!("Queued {}m ago", minutes)
    }
}

/// Render target for the job list
///
/// The poller and control actions depend only on this interface.
pub trait JobListView: Send + Sync {
    /// Replace the display with the given groups
    fn show_jobs(&self, groups: &JobGroups);

    /// Replace the display with an error line
    fn show_error(&self, message: &str);
}

/// Renders the job list to stdout
pub struct TerminalView;

impl JobListView for TerminalView {
    fn show_jobs(&self, groups: &JobGroups) {
        println!(
            "{}",
            format!("Download Jobs ({})", groups.total()).bold()
        );
        println!();

        if groups.total() == 0 {
            println!("{}", "No download jobs found.".yellow());
            return;
        }

        if !groups.active.is_empty() {
            println!("{}", "Active Jobs".bold().cyan());
            for job in &groups.active {
                print_job_item(job);
            }
        }

        if !groups.completed.is_empty() {
            println!("{}", "Completed Jobs".bold().green());
            for job in &groups.completed {
                print_job_item(job);
            }
        }

        if !groups.failed.is_empty() {
            println!("{}", "Failed Jobs".bold().red());
            for job in &groups.failed {
                print_job_item(job);
            }
        }

        if groups.has_terminal_jobs() {
            println!(
                "{}",
                "Run `aria job clear-completed` to clear finished jobs.".dimmed()
            );
        }
    }

    fn show_error(&self, message: &str) {
        println!("{}", format!("Error loading jobs: {}", message).red());
    }
}

/// Print a single job entry
fn print_job_item(job: &Job) {
    let status_colored = colorize_status(&job.status);

    println!(
        "  {} {} {}  {}",
        "▸".cyan(),
        job.job_type.label(),
        status_colored,
        time_info(job, Utc::now()).dimmed()
    );
    println!("    ID:       {}", job.short_id().dimmed());
    println!("    URL:      {}", job.url.dimmed());
    println!("    Platform: {}", job.platform.dimmed());

    if let Some(progress) = job.progress {
        println!("    Progress: {}%", progress);
    }

    if let Some(error) = &job.error_message {
        println!("    Error:    {}", error.red());
    }

    if !job.file_paths.is_empty() {
        println!("    Files:");
        for path in &job.file_paths {
            println!("      - {}", path);
        }
    }

    println!("    Logs:     {} entries", job.logs_count);
    println!();
}

/// Print detailed information for one job
pub fn print_job_details(job: &Job) {
    let status_colored = colorize_status(&job.status);

    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", job.job_id.cyan());
    println!("  Type:      {}", job.job_type.label());
    println!("  Status:    {}", status_colored);
    println!("  URL:       {}", job.url);
    println!("  Platform:  {}", job.platform);

    if let Some(user_id) = &job.user_id {
        println!("  User:      {}", user_id);
    }

    println!(
        "  Created:   {}",
        job.created_at.format("%Y-%m-%d %H:%M:%S")
    );

    if let Some(started) = job.started_at {
        println!("  Started:   {}", started.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(completed) = job.completed_at {
        println!("  Completed: {}", completed.format("%Y-%m-%d %H:%M:%S"));
        println!("  {}", time_info(job, Utc::now()));
    }

    if let Some(progress) = job.progress {
        println!("  Progress:  {}%", progress);
    }

    if let Some(error) = &job.error_message {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }

    if !job.file_paths.is_empty() {
        println!("\n{}", "Files:".bold());
        for path in &job.file_paths {
            println!("  - {}", path);
        }
    }

    println!("\n  Logs: {} entries", job.logs_count);
}

/// Print a log entry with its level colorized
pub fn print_log_entry(log: &LogEntry) {
    let level_str = log.level.label();
    let level_colored = match log.level {
        LogLevel::Debug => level_str.dimmed(),
        LogLevel::Info => level_str.cyan(),
        LogLevel::Warning => level_str.yellow(),
        LogLevel::Error => level_str.red(),
    };

    println!(
        "{} [{}] {}",
        log.timestamp.format("%H:%M:%S").to_string().dimmed(),
        level_colored,
        log.message
    );
}

/// Plain-text form of a log entry, used when saving logs to a file
pub fn format_log_line(log: &LogEntry) -> String {
    format!(
        "{} [{}] {}",
        log.timestamp.to_rfc3339(),
        log.level.label(),
        log.message
    )
}

/// Colorize job status for display
fn colorize_status(status: &JobStatus) -> colored::ColoredString {
    let status_str = status.label();
    match status {
        JobStatus::Queued => status_str.yellow(),
        JobStatus::Running => status_str.cyan(),
        JobStatus::Completed => status_str.green(),
        JobStatus::Failed => status_str.red(),
        JobStatus::Cancelled => status_str.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::domain::job::JobType;
    use chrono::TimeZone;

    fn job(id: &str, status: JobStatus) -> Job {
        Job {
            job_id: id.to_string(),
            job_type: JobType::TrackDownload,
            url: "https://tidal.com/browse/track/1".to_string(),
            platform: "tidal".to_string(),
            formats: vec![],
            user_id: None,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            started_at: None,
            completed_at: None,
            error_message: None,
            progress: None,
            file_paths: vec![],
            logs_count: 0,
        }
    }

    #[test]
    fn test_partition_groups_by_status() {
        let jobs = vec![
            job("a", JobStatus::Completed),
            job("b", JobStatus::Queued),
            job("c", JobStatus::Failed),
            job("d", JobStatus::Running),
            job("e", JobStatus::Cancelled),
        ];

        let groups = partition_jobs(jobs);

        let ids = |jobs: &[Job]| jobs.iter().map(|j| j.job_id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&groups.active), vec!["b", "d"]);
        assert_eq!(ids(&groups.completed), vec!["a"]);
        assert_eq!(ids(&groups.failed), vec!["c", "e"]);
        assert_eq!(groups.total(), 5);
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let jobs = vec![
            job("q1", JobStatus::Queued),
            job("r1", JobStatus::Running),
            job("q2", JobStatus::Queued),
        ];

        let groups = partition_jobs(jobs);
        let ids: Vec<_> = groups.active.iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "r1", "q2"]);
    }

    #[test]
    fn test_time_info_completed_duration() {
        let mut j = job("abc12345", JobStatus::Completed);
        j.completed_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 10, 0).unwrap());

        let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(time_info(&j, now), "Completed in 10m");
    }

    #[test]
    fn test_time_info_running() {
        let mut j = job("abc12345", JobStatus::Running);
        j.started_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 0).unwrap());

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 7, 30).unwrap();
        assert_eq!(time_info(&j, now), "Running for 7m");
    }

    #[test]
    fn test_time_info_queued() {
        let j = job("abc12345", JobStatus::Queued);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 3, 0).unwrap();
        assert_eq!(time_info(&j, now), "Queued 3m ago");
    }

    #[test]
    fn test_format_log_line() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            level: LogLevel::Info,
            message: "Starting download...".to_string(),
        };
        assert_eq!(
            format_log_line(&entry),
            "2024-01-01T00:00:00+00:00 [INFO] Starting download..."
        );
    }
}
