//! Runtime configuration, read once at startup.
//!
//! Resolution order: built-in defaults, then `primekg.toml` (explicit path
//! or found in the current/parent directories), then `PRIMEKG_*`
//! environment variables. Binaries apply their own flags last.

use crate::error::{ConfigError, KgError, KgResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "primekg.toml";

pub const ENV_DATA_PATH: &str = "PRIMEKG_DATA_PATH";
pub const ENV_AUTO_UPDATE: &str = "PRIMEKG_AUTO_UPDATE";
pub const ENV_UPDATE_INTERVAL_DAYS: &str = "PRIMEKG_UPDATE_INTERVAL_DAYS";

/// PrimeKG server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KgConfig {
    /// Directory holding `kg.csv` and the `.last_update` marker.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Refresh stale data before loading.
    #[serde(default = "default_auto_update")]
    pub auto_update: bool,
    /// Age in days after which the local copy is stale.
    #[serde(default = "default_update_interval_days")]
    pub update_interval_days: u64,
    /// Where the edge list is downloaded from.
    #[serde(default = "default_source_url")]
    pub source_url: String,
    #[serde(default = "default_download_timeout_secs")]
    pub download_timeout_secs: u64,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("primekg_data")
}
fn default_auto_update() -> bool { true }
fn default_update_interval_days() -> u64 { 7 }
fn default_source_url() -> String {
    "https://dataverse.harvard.edu/api/access/datafile/6180620".to_string()
}
fn default_download_timeout_secs() -> u64 { 300 }

impl Default for KgConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            auto_update: default_auto_update(),
            update_interval_days: default_update_interval_days(),
            source_url: default_source_url(),
            download_timeout_secs: default_download_timeout_secs(),
        }
    }
}

impl KgConfig {
    /// Resolve the configuration from file and process environment.
    pub fn load(explicit: Option<&Path>) -> KgResult<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(),
        };
        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Parse a TOML config file. Absent keys take their defaults.
    pub fn from_file(path: &Path) -> KgResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|reason| {
            KgError::Config(ConfigError::Parse {
                path: path.display().to_string(),
                reason,
            })
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Overlay environment variables, using `lookup` to read them.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> KgResult<Self> {
        if let Some(path) = lookup(ENV_DATA_PATH) {
            self.data_dir = PathBuf::from(path);
        }
        if let Some(flag) = lookup(ENV_AUTO_UPDATE) {
            self.auto_update = flag.trim().eq_ignore_ascii_case("true");
        }
        if let Some(days) = lookup(ENV_UPDATE_INTERVAL_DAYS) {
            self.update_interval_days = days.trim().parse().map_err(|_| {
                KgError::invalid_config(
                    ENV_UPDATE_INTERVAL_DAYS,
                    days.as_str(),
                    "expected a whole number of days",
                )
            })?;
        }
        Ok(self)
    }

    /// Generate the default config as a TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&KgConfig::default()).unwrap_or_default()
    }
}

/// Find primekg.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
