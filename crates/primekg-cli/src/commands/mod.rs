//! CLI command implementations.

pub mod init;
pub mod lookup;
pub mod refresh;
pub mod summary;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use primekg::prelude::*;
use std::path::Path;
use std::time::Duration;

use crate::config::Overrides;

/// Spinner shown while the edge list is fetched or parsed.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Resolve the configuration and load the graph behind a spinner.
pub(crate) fn open(overrides: &Overrides) -> Result<QueryEngine> {
    let config = overrides.resolve()?;
    let pb = spinner(&format!("Loading PrimeKG from {}", config.data_dir.display()));
    let engine = open_engine(&config);
    pb.finish_and_clear();

    if !engine.is_loaded() {
        eprintln!("{} {}", "•".yellow(), not_loaded_hint(&config.data_dir));
    }
    Ok(engine)
}

/// Shown when the edge list is missing or failed to parse.
pub(crate) fn not_loaded_hint(data_dir: &Path) -> String {
    format!(
        "No loadable edge list in {}. Run `primekg refresh` to download it.",
        data_dir.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_edge_list_is_reported_as_not_loadable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(EDGE_LIST_FILE), "id,name\n1,x\n").unwrap();
        let overrides = Overrides {
            config: None,
            data_dir: Some(dir.path().to_path_buf()),
            no_auto_update: true,
        };
        let engine = open(&overrides).unwrap();
        assert!(!engine.is_loaded());

        let hint = not_loaded_hint(dir.path());
        assert!(hint.starts_with("No loadable edge list in "), "{hint}");
        assert!(hint.contains(&dir.path().display().to_string()));
    }
}
