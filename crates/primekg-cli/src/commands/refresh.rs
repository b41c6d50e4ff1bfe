//! Download a fresh copy of the edge list.

use anyhow::{bail, Result};
use colored::Colorize;
use primekg::prelude::*;

use crate::config::Overrides;

pub fn run(overrides: &Overrides) -> Result<()> {
    let config = overrides.resolve()?;
    let mut engine = QueryEngine::unloaded();

    let pb = super::spinner(&format!("Downloading {}", config.source_url));
    let refreshed = refresh_engine(&mut engine, &config);
    pb.finish_and_clear();

    if !refreshed {
        bail!(
            "Refresh did not produce a loadable edge list in {}",
            config.data_dir.display()
        );
    }

    let graph = engine.graph().map(|g| (g.nodes().len(), g.edges().len()));
    println!(
        "{} PrimeKG refreshed in {}",
        "✓".green().bold(),
        config.data_dir.display().to_string().cyan()
    );
    if let Some((nodes, edges)) = graph {
        println!(
            "  {} nodes, {} edges",
            nodes.to_string().cyan(),
            edges.to_string().cyan()
        );
    }
    Ok(())
}
