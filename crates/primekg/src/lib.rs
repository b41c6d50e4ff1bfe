//! # PrimeKG
//!
//! Ad-hoc lookup over the PrimeKG precision medicine knowledge graph
//! (genes, drugs, diseases, pathways and the typed relationships between
//! them), for tool-calling clients.
//!
//! ## Quick Start
//!
//! ```rust
//! use primekg::prelude::*;
//!
//! let csv = "x_id,x_type,x_name,relation,y_id,y_type,y_name\n\
//!            DB1,drug,Aspirin,targets,PTGS1,protein,PTGS1\n\
//!            DB1,drug,Aspirin,targets,PTGS2,protein,PTGS2\n";
//! let engine = QueryEngine::loaded(loader::from_reader(csv.as_bytes()).unwrap());
//!
//! let targets = engine.find_drug_targets("aspirin");
//! assert!(targets.starts_with("Found 2 targets for aspirin:"));
//! ```
//!
//! ## Architecture
//!
//! - [`primekg_core`] - Node/edge tables, edge-list loader, configuration
//! - [`primekg_fetch`] - Staleness marker and dataset download
//! - [`primekg_query`] - Lookup operations, schema and statistics
//!
//! The `primekg-mcp` binary serves the operations over the Model Context
//! Protocol; `primekg-cli` runs them from a terminal.
//!
//! ## Data flow
//!
//! | Stage | Output |
//! |-------|--------|
//! | Fetch (`kg.csv`, `.last_update`) | Raw edge list on disk |
//! | Load | Edge table + derived node table |
//! | Query | Text payload per operation |

pub use primekg_core;
pub use primekg_fetch;
pub use primekg_query;

pub mod prelude;
pub mod startup;
