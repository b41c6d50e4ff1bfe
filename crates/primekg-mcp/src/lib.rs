//! PrimeKG MCP Server: Model Context Protocol interface for the
//! PrimeKG knowledge graph.
//!
//! Provides six tools:
//! - `search_nodes`: Substring search over node records
//! - `get_node_relationships`: Edges touching a node
//! - `find_drug_targets`: Gene/protein targets of a drug
//! - `find_disease_genes`: Genes associated with a disease
//! - `find_drug_disease_paths`: Drug-disease connections (explanatory stub)
//! - `get_node_details`: Node record by id or name
//!
//! and two resources, `primekg://schema` and `primekg://statistics`.
//!
//! The graph lives on a dedicated worker thread, so calls are answered
//! one at a time against a single, read-only graph.

pub mod tools;
pub mod worker;
