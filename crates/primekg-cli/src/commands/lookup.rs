//! Run lookup operations.

use anyhow::{Context, Result};
use colored::Colorize;
use primekg::prelude::*;

use crate::config::Overrides;

pub fn run(overrides: &Overrides, op: Operation) -> Result<()> {
    let engine = super::open(overrides)?;
    println!("{} {}", "→".blue(), op.name().white().bold());
    println!();
    println!("{}", engine.execute(&op));
    Ok(())
}

/// Parse `args` as a JSON object and run the named operation.
///
/// Bad names and arguments are rejected before the graph is loaded.
pub fn call(overrides: &Overrides, name: &str, args: &str) -> Result<()> {
    let arguments: serde_json::Value =
        serde_json::from_str(args).context("Arguments must be a JSON object")?;
    let op = Operation::parse(name, arguments).map_err(|e| {
        anyhow::anyhow!("{e}\nKnown operations: {}", Operation::NAMES.join(", "))
    })?;
    run(overrides, op)
}
