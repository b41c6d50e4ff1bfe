//! Configuration resolution for the CLI.
//!
//! Global flags sit on top of `KgConfig::load` (defaults, primekg.toml,
//! environment).

use anyhow::{Context, Result};
use primekg::prelude::KgConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Global flags that override the resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub no_auto_update: bool,
}

impl Overrides {
    /// Resolve the effective configuration.
    pub fn resolve(&self) -> Result<KgConfig> {
        let config = KgConfig::load(self.config.as_deref()).context("Failed to load config")?;
        Ok(self.apply(config))
    }

    pub fn apply(&self, mut config: KgConfig) -> KgConfig {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if self.no_auto_update {
            config.auto_update = false;
        }
        config
    }

    /// The same overrides, as `primekg-mcp` flags.
    pub fn mcp_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(path) = &self.config {
            args.push("--config".into());
            args.push(path.clone().into_os_string());
        }
        if let Some(dir) = &self.data_dir {
            args.push("--data-dir".into());
            args.push(dir.clone().into_os_string());
        }
        if self.no_auto_update {
            args.push("--no-auto-update".into());
        }
        args
    }
}

/// Write the default configuration to `path`.
pub fn save_default(path: &Path) -> Result<()> {
    std::fs::write(path, KgConfig::default_toml())
        .with_context(|| format!("Failed to write config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let overrides = Overrides {
            config: None,
            data_dir: Some(PathBuf::from("/tmp/kg")),
            no_auto_update: true,
        };
        let config = overrides.apply(KgConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("/tmp/kg"));
        assert!(!config.auto_update);
        assert_eq!(config.update_interval_days, 7);
    }

    #[test]
    fn absent_flags_keep_config() {
        let base = KgConfig {
            auto_update: true,
            ..KgConfig::default()
        };
        assert_eq!(Overrides::default().apply(base.clone()), base);
    }

    #[test]
    fn mcp_args_mirror_flags() {
        let overrides = Overrides {
            config: Some(PathBuf::from("kg.toml")),
            data_dir: None,
            no_auto_update: true,
        };
        let args: Vec<String> = overrides
            .mcp_args()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["--config", "kg.toml", "--no-auto-update"]);
    }

    #[test]
    fn saved_default_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primekg.toml");
        save_default(&path).unwrap();
        let loaded = KgConfig::from_file(&path).unwrap();
        assert_eq!(loaded, KgConfig::default());
    }
}
