//! PrimeKG CLI - lookups against the PrimeKG knowledge graph from a terminal.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use primekg::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "primekg")]
#[command(author, version, about = "PrimeKG - precision medicine knowledge graph lookups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: primekg.toml in the current or a parent directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory holding kg.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Never download; use whatever is cached
    #[arg(long, global = true)]
    no_auto_update: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default primekg.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Search nodes by name, id or type
    Search {
        /// Search query
        query: String,

        /// Filter by node type (gene/protein, drug, disease, ...)
        #[arg(short = 't', long = "type")]
        node_type: Option<String>,

        /// Maximum results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show relationships touching a node
    Relationships {
        /// Node id
        node_id: String,

        /// Only this relation type
        #[arg(short, long)]
        relation: Option<String>,

        /// Maximum results to return
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show protein targets of a drug
    Targets {
        /// Drug name (substring)
        drug: String,
    },

    /// Show genes associated with a disease
    DiseaseGenes {
        /// Disease name (substring)
        disease: String,

        /// Maximum results to return
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Drug-disease paths
    Paths {
        /// Drug name
        drug: String,
        /// Disease name
        disease: String,

        /// Maximum path length
        #[arg(short, long, default_value = "3")]
        max_length: usize,
    },

    /// Show a node record by id or name
    Details {
        /// Node id (or name fragment)
        node_id: String,
    },

    /// Describe the PrimeKG schema
    Schema,

    /// Show node and relation statistics
    Stats,

    /// Run an operation by name with JSON arguments
    Call {
        /// Operation name (e.g. search_nodes)
        operation: String,

        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Download a fresh copy of the edge list
    Refresh,

    /// Start the MCP server (delegates to primekg-mcp binary)
    Mcp,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let overrides = Overrides {
        config: cli.config,
        data_dir: cli.data_dir,
        no_auto_update: cli.no_auto_update,
    };

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Search { query, node_type, limit } => commands::lookup::run(
            &overrides,
            Operation::SearchNodes(SearchNodesRequest { query, node_type, limit }),
        ),
        Commands::Relationships { node_id, relation, limit } => commands::lookup::run(
            &overrides,
            Operation::GetNodeRelationships(NodeRelationshipsRequest {
                node_id,
                relationship_type: relation,
                limit,
            }),
        ),
        Commands::Targets { drug } => commands::lookup::run(
            &overrides,
            Operation::FindDrugTargets(DrugTargetsRequest { drug_name: drug }),
        ),
        Commands::DiseaseGenes { disease, limit } => commands::lookup::run(
            &overrides,
            Operation::FindDiseaseGenes(DiseaseGenesRequest {
                disease_name: disease,
                limit,
            }),
        ),
        Commands::Paths { drug, disease, max_length } => commands::lookup::run(
            &overrides,
            Operation::FindDrugDiseasePaths(DrugDiseasePathsRequest {
                drug_name: drug,
                disease_name: disease,
                max_path_length: max_length,
            }),
        ),
        Commands::Details { node_id } => commands::lookup::run(
            &overrides,
            Operation::GetNodeDetails(NodeDetailsRequest { node_id }),
        ),
        Commands::Schema => commands::summary::schema(),
        Commands::Stats => commands::summary::stats(&overrides),
        Commands::Call { operation, args } => commands::lookup::call(&overrides, &operation, &args),
        Commands::Refresh => commands::refresh::run(&overrides),
        Commands::Mcp => {
            let mut cmd = std::process::Command::new("primekg-mcp");
            cmd.args(overrides.mcp_args());
            let status = cmd.status().map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    anyhow::anyhow!(
                        "primekg-mcp binary not found. Install with: cargo install primekg-mcp"
                    )
                } else {
                    anyhow::anyhow!("Failed to start MCP server: {e}")
                }
            })?;
            std::process::exit(status.code().unwrap_or(1));
        }
    }
}
