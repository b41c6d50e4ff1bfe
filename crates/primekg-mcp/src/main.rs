//! PrimeKG MCP Server binary.
//!
//! Speaks the Model Context Protocol over stdio. Logs go to stderr so the
//! protocol stream on stdout stays clean.
//!
//! Usage:
//!   primekg-mcp [--data-dir /path/to/primekg_data] [--no-auto-update]
//!
//! MCP client config example:
//! ```json
//! {
//!   "mcpServers": {
//!     "primekg": {
//!       "command": "primekg-mcp",
//!       "args": ["--data-dir", "/home/me/primekg_data"]
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use clap::Parser;
use primekg::prelude::KgConfig;
use primekg_mcp::tools::{PrimeKgTools, DEFAULT_INSTRUCTIONS};
use primekg_mcp::worker::GraphHandle;
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "primekg-mcp")]
#[command(about = "PrimeKG MCP Server: precision medicine knowledge graph for AI agents")]
struct Args {
    /// Config file (defaults to primekg.toml in the current or a parent directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding kg.csv and the update marker
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Never download; serve whatever is cached
    #[arg(long)]
    no_auto_update: bool,

    /// Days before the cached copy counts as stale
    #[arg(long)]
    update_interval_days: Option<u64>,

    /// Instructions advertised to MCP clients
    #[arg(long, env = "INSTRUCTIONS", default_value = DEFAULT_INSTRUCTIONS)]
    instructions: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let mut config = KgConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if args.no_auto_update {
        config.auto_update = false;
    }
    if let Some(days) = args.update_interval_days {
        config.update_interval_days = days;
    }
    info!("Serving PrimeKG from {}", config.data_dir.display());

    let handle = GraphHandle::spawn(config);
    let tools = PrimeKgTools::new(handle, args.instructions);

    let service = tools.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
