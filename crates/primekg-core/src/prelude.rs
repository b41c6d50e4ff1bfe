//! PrimeKG Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use primekg_core::prelude::*;
//! ```

pub use crate::config::KgConfig;
pub use crate::error::{ConfigError, KgError, KgResult};
pub use crate::filter::{contains_any, Filter, Needle};
pub use crate::loader;
pub use crate::table::{EdgeTable, KnowledgeGraph, NodeTable};
pub use crate::types::{Edge, Node, EDGE_LIST_FILE, NODE_TYPES};
