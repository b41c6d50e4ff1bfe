//! Source Fetcher: staleness check plus download.

use crate::download::{Downloader, FetchResult, HttpDownloader};
use crate::marker::StalenessMarker;
use primekg_core::config::KgConfig;
use primekg_core::loader::edge_list_path;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};

/// Keeps `kg.csv` in a data directory up to date.
pub struct SourceFetcher<D = HttpDownloader> {
    downloader: D,
    source_url: String,
}

impl SourceFetcher<HttpDownloader> {
    /// HTTP fetcher for the configured source URL and timeout.
    pub fn from_config(config: &KgConfig) -> FetchResult<Self> {
        let downloader = HttpDownloader::new(Duration::from_secs(config.download_timeout_secs))?;
        Ok(Self::new(downloader, &config.source_url))
    }
}

impl<D: Downloader> SourceFetcher<D> {
    pub fn new(downloader: D, source_url: &str) -> Self {
        Self {
            downloader,
            source_url: source_url.to_string(),
        }
    }

    /// Download a new copy if the marker is absent or `max_age_days` old.
    ///
    /// Returns `true` only when a new copy was downloaded and the marker
    /// rewritten. Already-fresh data and failed downloads both return
    /// `false`; in either case the caller uses what is on disk.
    pub fn ensure_fresh(&self, data_dir: &Path, max_age_days: u64) -> bool {
        let marker = StalenessMarker::in_dir(data_dir);
        if !marker.is_stale(max_age_days) {
            info!("PrimeKG data is fresh (refresh interval: {} days)", max_age_days);
            return false;
        }

        info!("PrimeKG data is stale or missing, downloading latest version...");
        let refreshed = self.refresh(data_dir);
        if !refreshed {
            warn!("Failed to download data, attempting to use cached version");
        }
        refreshed
    }

    /// Download unconditionally and rewrite the marker on success.
    pub fn refresh(&self, data_dir: &Path) -> bool {
        info!("Downloading latest PrimeKG data...");
        let dest = edge_list_path(data_dir);
        if let Err(e) = self.downloader.download(&self.source_url, &dest) {
            error!("Error downloading {}: {}", self.source_url, e);
            error!("Failed to download {}", dest.display());
            return false;
        }

        let marker = StalenessMarker::in_dir(data_dir);
        if let Err(e) = marker.touch() {
            // The data itself is in place; the next start just downloads again.
            warn!("Could not write {}: {}", marker.path().display(), e);
        }
        info!("PrimeKG data download complete");
        true
    }
}

/// Create the data directory and, if enabled, refresh stale data.
///
/// Returns whether a new copy was downloaded.
pub fn prepare_data_dir(config: &KgConfig) -> std::io::Result<bool> {
    std::fs::create_dir_all(&config.data_dir)?;
    if !config.auto_update {
        return Ok(false);
    }

    match SourceFetcher::from_config(config) {
        Ok(fetcher) => Ok(fetcher.ensure_fresh(&config.data_dir, config.update_interval_days)),
        Err(e) => {
            error!("Could not create HTTP client: {}", e);
            Ok(false)
        }
    }
}
