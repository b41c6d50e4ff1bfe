//! # PrimeKG Core
//!
//! In-memory representation of the PrimeKG precision medicine knowledge
//! graph: an edge table read row for row from `kg.csv`, and a node table
//! derived from the edge endpoints.
//!
//! ## Quick Start
//!
//! ```rust
//! use primekg_core::prelude::*;
//!
//! let csv = "x_id,x_type,x_name,relation,y_id,y_type,y_name\n\
//!            DB1,drug,Aspirin,targets,PTGS1,protein,PTGS1\n";
//! let graph = loader::from_reader(csv.as_bytes()).unwrap();
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.edges().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod prelude;
pub mod render;
pub mod table;
pub mod types;
