//! The `.last_update` staleness marker.

use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Marker file name inside the data directory.
pub const MARKER_FILE: &str = ".last_update";

/// Timestamp of the last successful refresh, stored as local ISO-8601 text.
#[derive(Debug, Clone)]
pub struct StalenessMarker {
    path: PathBuf,
}

impl StalenessMarker {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(MARKER_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last refresh time. `None` if the marker is absent or unreadable.
    pub fn read(&self) -> Option<NaiveDateTime> {
        if !self.path.exists() {
            return None;
        }
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Error reading timestamp: {}", e);
                return None;
            }
        };
        match text.trim().parse::<NaiveDateTime>() {
            Ok(ts) => Some(ts),
            Err(e) => {
                warn!("Error reading timestamp {:?}: {}", text.trim(), e);
                None
            }
        }
    }

    /// Stale when absent, unreadable, or at least `max_age_days` whole days old.
    pub fn is_stale_at(&self, now: NaiveDateTime, max_age_days: u64) -> bool {
        match self.read() {
            None => true,
            Some(last) => (now - last).num_days() >= i64::try_from(max_age_days).unwrap_or(i64::MAX),
        }
    }

    pub fn is_stale(&self, max_age_days: u64) -> bool {
        self.is_stale_at(Local::now().naive_local(), max_age_days)
    }

    pub fn touch_at(&self, now: NaiveDateTime) -> std::io::Result<()> {
        std::fs::write(&self.path, now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string())
    }

    /// Record "now" as the last successful refresh.
    pub fn touch(&self) -> std::io::Result<()> {
        self.touch_at(Local::now().naive_local())
    }
}
