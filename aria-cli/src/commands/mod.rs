//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod download;
mod job;
mod platform;
mod search;

pub use download::DownloadKind;
pub use job::JobCommands;
pub use search::SearchCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Job queue management
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Search the backend catalogs
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },
    /// Submit a download job
    Download {
        /// URL of the track or album to download
        url: String,

        /// Platform the URL belongs to
        #[arg(short, long)]
        platform: String,

        /// Whether the URL points at a track or an album
        #[arg(short, long, value_enum, default_value_t = DownloadKind::Track)]
        kind: DownloadKind,
    },
    /// List available platforms
    Platforms,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Job { command } => job::handle_job_command(command, config).await,
        Commands::Search { command } => search::handle_search_command(command, config).await,
        Commands::Download {
            url,
            platform,
            kind,
        } => download::handle_download(config, &url, &platform, kind).await,
        Commands::Platforms => platform::handle_platforms(config).await,
    }
}
