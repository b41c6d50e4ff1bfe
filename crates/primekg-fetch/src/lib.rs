//! # PrimeKG Fetch
//!
//! Keeps the local copy of the PrimeKG edge list fresh.
//!
//! A `.last_update` marker in the data directory records the last
//! successful download. When the marker is missing or older than the
//! configured interval, [`SourceFetcher::ensure_fresh`] downloads
//! `kg.csv` again. Failures are logged and never fatal: the caller keeps
//! whatever is already on disk.

pub mod download;
pub mod fetcher;
pub mod marker;

pub use download::{Downloader, FetchError, FetchResult, HttpDownloader};
pub use fetcher::{prepare_data_dir, SourceFetcher};
pub use marker::{StalenessMarker, MARKER_FILE};
