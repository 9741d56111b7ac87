//! Platform command handler

use anyhow::Result;
use colored::*;

use aria_client::BackendClient;

use crate::config::Config;

/// List the platforms the backend has modules for
pub async fn handle_platforms(config: &Config) -> Result<()> {
    let client = BackendClient::new(&config.backend_url);
    let platforms = client.list_platforms().await?;

    if platforms.is_empty() {
        println!("{}", "No platforms available.".yellow());
        return Ok(());
    }

    println!("{}", "Available platforms:".bold());
    for platform in platforms {
        println!("  {} {}", "▸".cyan(), platform);
    }
    Ok(())
}
