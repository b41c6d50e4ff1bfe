//! PrimeKG Query Prelude: convenient imports for common usage.
//!
//! ```rust
//! use primekg_query::prelude::*;
//! ```

pub use crate::engine::{QueryEngine, NOT_LOADED};
pub use crate::ops::{
    call, read_resource, DiseaseGenesRequest, DrugDiseasePathsRequest, DrugTargetsRequest,
    NodeDetailsRequest, NodeRelationshipsRequest, Operation, QueryError, Resource,
    SearchNodesRequest,
};
pub use crate::summary::{schema, statistics};

// Re-export from core
pub use primekg_core::prelude::*;
