//! Search, download submission, and platform endpoints

use tracing::debug;

use crate::BackendClient;
use crate::error::Result;
use aria_core::dto::job::{DownloadRequest, JobAccepted};
use aria_core::dto::search::{
    AlbumSearchRequest, AlbumSearchResults, AlbumTrackList, AlbumTracksRequest, PlatformList,
    TrackSearchRequest, TrackSearchResults,
};

impl BackendClient {
    /// Search for tracks
    ///
    /// Returns [`crate::ClientError::TwoFactorRequired`] when the backend
    /// answers with a 428 challenge; the caller verifies the code and
    /// retries with `verification_code` set.
    pub async fn search_tracks(&self, req: &TrackSearchRequest) -> Result<TrackSearchResults> {
        let url = format!("{}/api/search/tracks", self.base_url);
        debug!(query = %req.query, "searching tracks");
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_search_response(response).await
    }

    /// Search for albums without loading their track lists
    pub async fn search_albums(&self, req: &AlbumSearchRequest) -> Result<AlbumSearchResults> {
        let url = format!("{}/api/search/albums", self.base_url);
        debug!(query = %req.query, "searching albums");
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_search_response(response).await
    }

    /// Load the track list for one album on demand
    pub async fn album_tracks(
        &self,
        album_id: &str,
        req: &AlbumTracksRequest,
    ) -> Result<AlbumTrackList> {
        let url = format!("{}/api/albums/{}/tracks", self.base_url, album_id);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Submit a download job
    ///
    /// The backend answers 202 with a receipt; progress is tracked through
    /// the job queue afterwards.
    pub async fn start_download(&self, req: &DownloadRequest) -> Result<JobAccepted> {
        let url = format!("{}/api/download", self.base_url);
        debug!(url = %req.url, platform = %req.platform, "submitting download");
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// List the platforms the backend has modules for
    pub async fn list_platforms(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/platforms", self.base_url);
        let response = self.client.get(&url).send().await?;

        let list: PlatformList = self.handle_response(response).await?;
        Ok(list.platforms)
    }
}
