//! Download command handler

use anyhow::Result;
use clap::ValueEnum;
use colored::*;

use aria_client::BackendClient;
use aria_core::dto::job::DownloadRequest;

use crate::config::Config;

/// Whether a download URL points at a track or an album
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DownloadKind {
    Track,
    Album,
}

impl DownloadKind {
    fn as_str(&self) -> &'static str {
        match self {
            DownloadKind::Track => "track",
            DownloadKind::Album => "album",
        }
    }
}

impl std::fmt::Display for DownloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Submit a download job and print the receipt
///
/// The backend answers 202 and runs the job asynchronously; `aria job
/// watch` tracks it from there.
pub async fn handle_download(
    config: &Config,
    url: &str,
    platform: &str,
    kind: DownloadKind,
) -> Result<()> {
    let client = BackendClient::new(&config.backend_url);

    let receipt = client
        .start_download(&DownloadRequest {
            url: url.to_string(),
            platform: platform.to_string(),
            kind: kind.as_str().to_string(),
        })
        .await?;

    println!("{}", receipt.message.green());
    println!("Job ID: {}", receipt.job_id.cyan());
    println!(
        "{}",
        "Track progress with `aria job watch`.".dimmed()
    );
    Ok(())
}
