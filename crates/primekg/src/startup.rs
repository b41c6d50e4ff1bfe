//! Startup composition: fetch if stale, then load.

use primekg_core::config::KgConfig;
use primekg_core::loader;
use primekg_fetch::{prepare_data_dir, SourceFetcher};
use primekg_query::QueryEngine;
use tracing::error;

/// Bring the data directory up to date (if enabled) and load the graph.
///
/// Never fails: fetch and load problems are logged and leave the engine
/// unloaded or on cached data.
pub fn open_engine(config: &KgConfig) -> QueryEngine {
    if let Err(e) = prepare_data_dir(config) {
        error!(
            "Could not prepare data directory {}: {}",
            config.data_dir.display(),
            e
        );
    }
    QueryEngine::from_data_dir(&config.data_dir)
}

/// Download a new copy regardless of staleness and reload on success.
///
/// Returns whether the engine now serves the new copy. A failed download
/// or load keeps the current graph.
pub fn refresh_engine(engine: &mut QueryEngine, config: &KgConfig) -> bool {
    if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
        error!("Could not create {}: {}", config.data_dir.display(), e);
        return false;
    }
    let fetcher = match SourceFetcher::from_config(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Could not create HTTP client: {}", e);
            return false;
        }
    };
    if !fetcher.refresh(&config.data_dir) {
        return false;
    }
    engine.reload(loader::load(&config.data_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primekg_core::types::EDGE_LIST_FILE;

    fn offline(dir: &std::path::Path) -> KgConfig {
        KgConfig {
            data_dir: dir.to_path_buf(),
            auto_update: false,
            source_url: "http://127.0.0.1:9/kg.csv".into(),
            download_timeout_secs: 2,
            ..KgConfig::default()
        }
    }

    #[test]
    fn opens_cached_data_without_network() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(EDGE_LIST_FILE),
            "x_id,x_type,x_name,relation,y_id,y_type,y_name\nDB1,drug,Aspirin,targets,P1,protein,PTGS1\n",
        )
        .unwrap();
        let engine = open_engine(&offline(dir.path()));
        assert!(engine.is_loaded());
    }

    #[test]
    fn missing_data_leaves_engine_unloaded() {
        let dir = tempfile::tempdir().unwrap();
        let engine = open_engine(&offline(&dir.path().join("empty")));
        assert!(!engine.is_loaded());
    }

    #[test]
    fn failed_refresh_keeps_current_graph() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(EDGE_LIST_FILE),
            "x_id,x_type,x_name,relation,y_id,y_type,y_name\nDB1,drug,Aspirin,targets,P1,protein,PTGS1\n",
        )
        .unwrap();
        let config = offline(dir.path());
        let mut engine = open_engine(&config);

        assert!(!refresh_engine(&mut engine, &config));
        assert!(engine.is_loaded());
        assert!(engine.get_node_details("DB1").starts_with("Node details:"));
    }
}
