//! Aria CLI
//!
//! Command-line companion for the Aria download backend: watch the job
//! queue, inspect logs, search catalogs, and submit downloads.

mod actions;
mod commands;
mod config;
mod id_resolver;
mod poller;
mod prompt;
mod view;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aria")]
#[command(about = "Aria media download CLI", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(
        long,
        env = "ARIA_BACKEND_URL",
        default_value = "http://localhost:8000"
    )]
    backend_url: String,

    /// Poll interval in seconds for watch and follow modes
    #[arg(long, env = "ARIA_POLL_INTERVAL", default_value_t = 5)]
    interval: u64,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aria_cli=info,aria_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
        poll_interval: Duration::from_secs(cli.interval),
        assume_yes: cli.yes,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
