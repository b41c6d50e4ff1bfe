//! Schema and statistics.

use anyhow::Result;
use colored::Colorize;
use primekg::prelude::*;

use crate::config::Overrides;

pub fn schema() -> Result<()> {
    println!("{}", primekg::prelude::schema());
    Ok(())
}

pub fn stats(overrides: &Overrides) -> Result<()> {
    let engine = super::open(overrides)?;
    println!("{}", statistics(&engine));
    println!("{}", "═".repeat(40).dimmed());
    Ok(())
}
