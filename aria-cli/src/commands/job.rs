//! Job command handlers
//!
//! Handles all job-related CLI commands: listing, watching, viewing
//! details and logs, and the control actions (cancel, retry, remove,
//! clear-completed).

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use tokio::time;

use aria_client::{BackendClient, JobsApi};

use crate::actions::{self, ActionOutcome};
use crate::config::Config;
use crate::id_resolver::resolve_job_id;
use crate::poller::JobPoller;
use crate::prompt::StdinPrompt;
use crate::view::{
    JobListView, TerminalView, format_log_line, partition_jobs, print_job_details,
    print_log_entry,
};

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List all jobs once, grouped by status
    List {
        /// Only show jobs belonging to this user
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Watch the job list, refreshing on an interval until Ctrl-C
    Watch,
    /// Get job details
    Get {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Show job logs
    Logs {
        /// Job ID or unambiguous prefix
        id: String,

        /// Keep fetching and print new entries as they appear
        #[arg(short, long)]
        follow: bool,

        /// Save the log text to a file instead of printing it
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Cancel a job
    Cancel {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Retry a failed job
    Retry {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Remove a job from the list
    Remove {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Clear all completed and failed jobs
    ClearCompleted,
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = BackendClient::new(&config.backend_url);
    let prompt = StdinPrompt {
        assume_yes: config.assume_yes,
    };

    match command {
        JobCommands::List { user } => list_jobs(&client, user.as_deref()).await,
        JobCommands::Watch => watch_jobs(client, config).await,
        JobCommands::Get { id } => get_job(&client, &id).await,
        JobCommands::Logs { id, follow, output } => {
            show_job_logs(&client, config, &id, follow, output).await
        }
        JobCommands::Cancel { id } => cancel_job(&client, &prompt, &id).await,
        JobCommands::Retry { id } => retry_job(&client, &id).await,
        JobCommands::Remove { id } => remove_job(&client, &prompt, &id).await,
        JobCommands::ClearCompleted => clear_completed(&client, &prompt).await,
    }
}

/// Fetch and render the job list once
async fn list_jobs(client: &BackendClient, user: Option<&str>) -> Result<()> {
    let jobs = match user {
        Some(user_id) => client.list_jobs_for_user(user_id).await?,
        None => client.list_jobs().await?,
    };
    TerminalView.show_jobs(&partition_jobs(jobs));
    Ok(())
}

/// Poll the job list until interrupted
async fn watch_jobs(client: BackendClient, config: &Config) -> Result<()> {
    println!(
        "{}",
        format!(
            "Watching jobs every {}s (Ctrl-C to exit)",
            config.poll_interval.as_secs()
        )
        .dimmed()
    );

    let mut poller = JobPoller::new(
        Arc::new(client),
        Arc::new(TerminalView),
        config.poll_interval,
    );

    poller.start().await;
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    poller.stop();

    println!("{}", "Stopped watching.".dimmed());
    Ok(())
}

/// Get and display a single job
async fn get_job(client: &BackendClient, id: &str) -> Result<()> {
    let job_id = resolve_job_id(client, id).await?;

    // The job can disappear between the listing and the fetch
    let job = match client.get_job(&job_id).await {
        Ok(job) => job,
        Err(e) if e.is_not_found() => bail!("Job {} no longer exists", job_id),
        Err(e) => return Err(e.into()),
    };

    print_job_details(&job);
    Ok(())
}

/// Show or save the logs of a job
async fn show_job_logs(
    client: &BackendClient,
    config: &Config,
    id: &str,
    follow: bool,
    output: Option<std::path::PathBuf>,
) -> Result<()> {
    let job_id = resolve_job_id(client, id).await?;

    let job = client.get_job(&job_id).await?;
    let logs = client.get_job_logs(&job_id).await?;

    if let Some(path) = output {
        let text: String = logs
            .iter()
            .map(|entry| format_log_line(entry) + "\n")
            .collect();
        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write logs to {}", path.display()))?;
        println!(
            "Saved {} log entries to {}",
            logs.len(),
            path.display().to_string().cyan()
        );
        return Ok(());
    }

    println!(
        "{} {}",
        format!("Logs for job {}:", job.short_id()).bold(),
        job.status.label().dimmed()
    );
    println!("{}", "─".repeat(80).dimmed());
    if logs.is_empty() {
        println!("{}", "No logs available.".yellow());
    }
    for entry in &logs {
        print_log_entry(entry);
    }

    if !follow {
        println!("{}", "─".repeat(80).dimmed());
        return Ok(());
    }

    // The snapshot is append-only, so printing past the last seen count
    // yields only new entries.
    let mut seen = logs.len();
    let mut ticker = time::interval(config.poll_interval);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match client.get_job_logs(&job_id).await {
                    Ok(logs) => {
                        for entry in logs.iter().skip(seen) {
                            print_log_entry(entry);
                        }
                        seen = seen.max(logs.len());
                    }
                    Err(e) => {
                        println!("{}", format!("Error refreshing logs: {}", e).red());
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("{}", "─".repeat(80).dimmed());
                return Ok(());
            }
        }
    }
}

/// Cancel a job after confirmation
async fn cancel_job(client: &BackendClient, prompt: &StdinPrompt, id: &str) -> Result<()> {
    let job_id = resolve_job_id(client, id).await?;

    match actions::cancel_job(client, &TerminalView, prompt, &job_id).await? {
        ActionOutcome::Completed => {
            println!("{}", "Job cancelled.".green());
        }
        ActionOutcome::Declined => {
            println!("{}", "Cancel declined.".dimmed());
        }
    }
    Ok(())
}

/// Retry a failed job
async fn retry_job(client: &BackendClient, id: &str) -> Result<()> {
    let job_id = resolve_job_id(client, id).await?;

    let receipt = actions::retry_job(client, &TerminalView, &job_id).await?;
    println!(
        "{} New job: {}",
        receipt.message.green(),
        receipt.new_job_id.cyan()
    );
    Ok(())
}

/// Remove a job after confirmation
async fn remove_job(client: &BackendClient, prompt: &StdinPrompt, id: &str) -> Result<()> {
    let job_id = resolve_job_id(client, id).await?;

    match actions::remove_job(client, &TerminalView, prompt, &job_id).await? {
        ActionOutcome::Completed => {
            println!("{}", "Job removed.".green());
        }
        ActionOutcome::Declined => {
            println!("{}", "Remove declined.".dimmed());
        }
    }
    Ok(())
}

/// Clear completed and failed jobs after confirmation
async fn clear_completed(client: &BackendClient, prompt: &StdinPrompt) -> Result<()> {
    match actions::clear_completed_jobs(client, &TerminalView, prompt).await? {
        Some(receipt) => {
            println!("{}", receipt.message.green());
        }
        None => {
            println!("{}", "Clear declined.".dimmed());
        }
    }
    Ok(())
}
