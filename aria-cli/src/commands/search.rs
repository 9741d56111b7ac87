//! Search command handlers
//!
//! Track and album search against the backend, including the second-factor
//! retry loop: a 428 challenge prompts for a verification code, verifies it
//! against the session the backend handed out, and re-issues the original
//! search once with the code attached.

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;

use aria_client::{BackendClient, ClientError};
use aria_core::dto::auth::AuthRequest;
use aria_core::dto::search::{
    AlbumSearchRequest, AlbumTracksRequest, TrackHit, TrackSearchRequest,
};

use crate::config::Config;
use crate::prompt::read_verification_code;

/// Search subcommands
#[derive(Subcommand)]
pub enum SearchCommands {
    /// Search for tracks
    Tracks {
        /// Search query
        query: String,

        /// Platform to search
        #[arg(short, long)]
        platform: String,

        #[arg(short, long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 50)]
        limit: u32,

        /// Result page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Ask the backend to group results by album
        #[arg(long)]
        group_by_album: bool,
    },
    /// Search for albums without loading their track lists
    Albums {
        /// Search query
        query: String,

        /// Platform to search
        #[arg(short, long)]
        platform: String,

        #[arg(short, long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Load the track list for one album
    AlbumTracks {
        /// Album ID from an album search
        album_id: String,

        /// Platform the album belongs to
        #[arg(short, long)]
        platform: String,

        #[arg(short, long)]
        username: String,

        #[arg(long)]
        password: String,
    },
}

/// Handle search commands
pub async fn handle_search_command(command: SearchCommands, config: &Config) -> Result<()> {
    let client = BackendClient::new(&config.backend_url);

    match command {
        SearchCommands::Tracks {
            query,
            platform,
            username,
            password,
            limit,
            page,
            group_by_album,
        } => {
            let request = TrackSearchRequest {
                query,
                platforms: vec![platform],
                limit,
                page,
                group_by_album,
                username,
                password,
                verification_code: None,
            };
            search_tracks(&client, request).await
        }
        SearchCommands::Albums {
            query,
            platform,
            username,
            password,
            limit,
        } => {
            let request = AlbumSearchRequest {
                query,
                platforms: vec![platform],
                limit,
                username,
                password,
            };
            search_albums(&client, request).await
        }
        SearchCommands::AlbumTracks {
            album_id,
            platform,
            username,
            password,
        } => {
            let request = AlbumTracksRequest {
                album_id: album_id.clone(),
                platform,
                username,
                password,
            };
            album_tracks(&client, &album_id, request).await
        }
    }
}

/// Search tracks, walking through a second-factor challenge if one comes back
async fn search_tracks(client: &BackendClient, mut request: TrackSearchRequest) -> Result<()> {
    let results = match client.search_tracks(&request).await {
        Ok(results) => results,
        Err(ClientError::TwoFactorRequired {
            session_id,
            message,
        }) => {
            println!("{}", message.yellow());
            let code =
                verify_code(client, &request.username, &request.password, &session_id).await?;

            // Retry the original search once with the verified code attached
            request.verification_code = Some(code);
            client.search_tracks(&request).await?
        }
        Err(e) => return Err(e.into()),
    };

    if results.tracks.is_empty() {
        println!("{}", "No tracks found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} track(s):", results.tracks.len()).bold()
    );
    println!();
    for track in &results.tracks {
        print_track(track);
    }

    if let Some(pagination) = &results.pagination {
        println!(
            "{}",
            format!(
                "Page {} of {} ({} results total)",
                pagination.current_page, pagination.total_pages, pagination.total_results
            )
            .dimmed()
        );
        if pagination.has_next {
            println!(
                "{}",
                "More results available; pass --page to fetch the next page.".dimmed()
            );
        }
    }

    Ok(())
}

/// Search albums
async fn search_albums(client: &BackendClient, request: AlbumSearchRequest) -> Result<()> {
    let results = match client.search_albums(&request).await {
        Ok(results) => results,
        Err(ClientError::TwoFactorRequired {
            session_id,
            message,
        }) => {
            println!("{}", message.yellow());
            // The album request carries no code field; verifying the
            // session is enough before the plain retry.
            verify_code(client, &request.username, &request.password, &session_id).await?;
            client.search_albums(&request).await?
        }
        Err(e) => return Err(e.into()),
    };

    if results.albums.is_empty() {
        println!("{}", "No albums found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} album(s):", results.albums.len()).bold()
    );
    println!();
    for album in &results.albums {
        println!(
            "  {} {} {}",
            "▸".cyan(),
            album.name.bold(),
            album
                .artist
                .as_deref()
                .map(|a| format!("by {}", a))
                .unwrap_or_default()
                .dimmed()
        );
        println!("    ID: {}", album.id.dimmed());
        if let Some(url) = &album.url {
            println!("    URL: {}", url.dimmed());
        }
        println!();
    }

    Ok(())
}

/// Show the track list of one album
async fn album_tracks(
    client: &BackendClient,
    album_id: &str,
    request: AlbumTracksRequest,
) -> Result<()> {
    let list = client.album_tracks(album_id, &request).await?;

    if list.tracks.is_empty() {
        println!("{}", "No tracks found for this album.".yellow());
        return Ok(());
    }

    println!("{}", format!("Tracks in album {}:", album_id).bold());
    println!();
    for track in &list.tracks {
        print_track(track);
    }

    Ok(())
}

/// Print one track hit
fn print_track(track: &TrackHit) {
    let number = track
        .track_number
        .map(|n| format!("{}. ", n))
        .unwrap_or_default();
    let duration = track
        .duration
        .map(|secs| format!(" [{}:{:02}]", secs / 60, secs % 60))
        .unwrap_or_default();
    let explicit = if track.explicit.unwrap_or(false) {
        " [EXPLICIT]".red().to_string()
    } else {
        String::new()
    };

    println!(
        "  {} {}{}{}{}",
        "▸".cyan(),
        number,
        track.name.bold(),
        duration.dimmed(),
        explicit
    );
    if let Some(artist) = &track.artist {
        println!("    by {}", artist);
    }
    if let Some(album) = &track.album {
        println!("    Album: {}", album.dimmed());
    }
    if let Some(url) = &track.url {
        println!("    URL: {}", url.dimmed());
    }
    if let Some(info) = &track.additional_info {
        println!("    {}", info.dimmed());
    }
    println!();
}

/// Prompt for a code and verify it against the backend session
///
/// Returns the accepted code so track searches can attach it on retry.
async fn verify_code(
    client: &BackendClient,
    username: &str,
    password: &str,
    session_id: &str,
) -> Result<String> {
    let code = read_verification_code()?;

    let response = client
        .authenticate(&AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
            verification_code: Some(code.clone()),
            session_id: Some(session_id.to_string()),
        })
        .await?;

    if response.requires_2fa {
        bail!("Verification failed: {}", response.message);
    }

    println!("{}", response.message.green());
    Ok(code)
}
