//! Transfer of the edge list from its remote location.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Download error types.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Download of {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Fetches a URL into a local file.
pub trait Downloader {
    /// Download `url` to `dest`, returning the number of bytes written.
    ///
    /// On failure `dest` must be left as it was.
    fn download(&self, url: &str, dest: &Path) -> FetchResult<u64>;
}

/// Blocking HTTP downloader with a single overall timeout.
///
/// The body is streamed to `<dest>.part` and renamed over `dest` only
/// after the transfer completes.
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client })
    }

    fn transfer(&self, url: &str, part: &Path) -> FetchResult<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let mut file = File::create(part)?;
        let bytes = response
            .copy_to(&mut file)
            .map_err(|e| FetchError::Http(e.to_string()))?;
        file.flush()?;
        Ok(bytes)
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> FetchResult<u64> {
        info!("Downloading from {}...", url);
        let part = part_path(dest);

        let bytes = match self.transfer(url, &part) {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = std::fs::remove_file(&part);
                return Err(e);
            }
        };

        std::fs::rename(&part, dest)?;
        debug!("Wrote {} bytes", bytes);
        info!("Successfully downloaded to {}", dest.display());
        Ok(bytes)
    }
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
