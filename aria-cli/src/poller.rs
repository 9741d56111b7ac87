//! Job poller
//!
//! Keeps the on-screen job list approximately in sync with backend state by
//! re-fetching the full list on a fixed timer. Every render is a full
//! replacement, so overlapping refreshes resolve as last-write-wins and a
//! stale response arriving after `stop()` is harmless.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};
use tracing::{debug, warn};

use crate::view::{JobListView, partition_jobs};
use aria_client::JobsApi;

/// Polls the job list and drives a [`JobListView`]
///
/// Owns its timer handle; there is no shared mutable state outside this
/// struct and only the poller writes it.
pub struct JobPoller {
    client: Arc<dyn JobsApi>,
    view: Arc<dyn JobListView>,
    interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl JobPoller {
    /// Creates a new poller; call [`start`](Self::start) to begin polling
    pub fn new(client: Arc<dyn JobsApi>, view: Arc<dyn JobListView>, interval: Duration) -> Self {
        Self {
            client,
            view,
            interval,
            timer: None,
        }
    }

    /// Start polling
    ///
    /// Cancels any existing timer first, so calling this twice leaves
    /// exactly one timer armed. Performs one immediate fetch-and-render,
    /// then re-fetches every interval until [`stop`](Self::stop).
    pub async fn start(&mut self) {
        self.stop();

        refresh_jobs(self.client.as_ref(), self.view.as_ref()).await;

        let client = Arc::clone(&self.client);
        let view = Arc::clone(&self.view);
        let period = self.interval;

        self.timer = Some(tokio::spawn(async move {
            let mut ticker = time::interval(period);
            // The first tick of a tokio interval completes immediately;
            // the refresh above already covered it.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                debug!("poll tick");
                refresh_jobs(client.as_ref(), view.as_ref()).await;
            }
        }));
    }

    /// Stop polling; a no-op if already stopped
    ///
    /// An in-flight fetch is not awaited. If its response still renders,
    /// the full-replacement render makes that harmless.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Whether a timer is currently armed
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl Drop for JobPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fetch the job list and render it
///
/// A failed fetch renders a visible error and nothing else; the next tick
/// is the retry, so errors never escape a poll cycle.
pub async fn refresh_jobs(client: &dyn JobsApi, view: &dyn JobListView) {
    match client.list_jobs().await {
        Ok(jobs) => {
            view.show_jobs(&partition_jobs(jobs));
        }
        Err(e) => {
            warn!("failed to fetch jobs: {}", e);
            view.show_error(&e.to_string());
        }
    }
}
