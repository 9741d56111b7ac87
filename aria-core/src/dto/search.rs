//! Search DTOs for the backend API

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/search/tracks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchRequest {
    pub query: String,
    pub platforms: Vec<String>,
    pub limit: u32,
    pub page: u32,
    pub group_by_album: bool,
    pub username: String,
    pub password: String,
    /// Second-factor code, echoed on the retry after a 428 challenge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
}

/// Response body for `POST /api/search/tracks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchResults {
    #[serde(default)]
    pub tracks: Vec<TrackHit>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One track in a search result
///
/// Field presence varies by platform module, so everything beyond the name
/// is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackHit {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub album_artist: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub track_number: Option<u32>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub explicit: Option<bool>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// Pagination block attached to track search responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub limit: u32,
}

/// Request body for `POST /api/search/albums`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSearchRequest {
    pub query: String,
    pub platforms: Vec<String>,
    pub limit: u32,
    pub username: String,
    pub password: String,
}

/// Response body for `POST /api/search/albums`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSearchResults {
    #[serde(default)]
    pub albums: Vec<AlbumHit>,
}

/// One album in a search result; track lists are loaded on demand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumHit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<serde_json::Value>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tracks_loaded: bool,
}

/// Request body for `POST /api/albums/{id}/tracks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksRequest {
    pub album_id: String,
    pub platform: String,
    pub username: String,
    pub password: String,
}

/// Response body for `POST /api/albums/{id}/tracks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrackList {
    #[serde(default)]
    pub tracks: Vec<TrackHit>,
}

/// Body of `GET /api/platforms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformList {
    pub platforms: Vec<String>,
}
