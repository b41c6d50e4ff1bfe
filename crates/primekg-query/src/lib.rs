//! # PrimeKG Query
//!
//! Lookup operations over a loaded PrimeKG graph.
//!
//! Every operation is a pure read that returns a text payload. Empty
//! results and a missing graph are reported as text; only requests for
//! an unknown operation or resource are errors.
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | `search_nodes` | Substring search over node records |
//! | `get_node_relationships` | Edges touching a node |
//! | `find_drug_targets` | Target/protein edges of a drug |
//! | `find_disease_genes` | Gene/association edges of a disease |
//! | `find_drug_disease_paths` | Explanatory stub; no traversal |
//! | `get_node_details` | Node record by id, or by name |
//!
//! Resources: `primekg://schema` and `primekg://statistics`.

pub mod engine;
pub mod ops;
pub mod prelude;
pub mod summary;

pub use engine::{QueryEngine, NOT_LOADED};
pub use ops::{Operation, QueryError, Resource};
