//! Record types shared by the loader, the query engine and the reporters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the raw edge-list file inside the data directory.
pub const EDGE_LIST_FILE: &str = "kg.csv";

/// Columns every edge-list file must carry.
pub const REQUIRED_EDGE_COLUMNS: [&str; 7] = [
    "x_id", "x_type", "x_name", "relation", "y_id", "y_type", "y_name",
];

/// Column headers of the node table, in render order.
pub const NODE_COLUMNS: [&str; 3] = ["node_id", "node_type", "node_name"];

/// Node categories found in PrimeKG.
pub const NODE_TYPES: [&str; 10] = [
    "gene/protein",
    "drug",
    "disease",
    "biological_process",
    "molecular_function",
    "cellular_component",
    "pathway",
    "anatomy",
    "phenotype",
    "exposure",
];

/// A graph entity, derived from one endpoint of an edge row.
///
/// `node_type` is kept as the raw source string; PrimeKG is not strict
/// about the taxonomy and comparisons are case-insensitive anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub node_id: String,
    pub node_type: String,
    pub node_name: String,
}

impl Node {
    pub fn new(
        node_id: impl Into<String>,
        node_type: impl Into<String>,
        node_name: impl Into<String>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            node_type: node_type.into(),
            node_name: node_name.into(),
        }
    }

    /// Field values in [`NODE_COLUMNS`] order.
    pub fn fields(&self) -> [&str; 3] {
        [&self.node_id, &self.node_type, &self.node_name]
    }
}

/// Tab-separated field values. Text search matches against this rendering.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.node_id, self.node_type, self.node_name)
    }
}

/// A directed, typed relationship taken verbatim from one edge-list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub x_id: String,
    pub x_type: String,
    pub x_name: String,
    pub relation: String,
    pub y_id: String,
    pub y_type: String,
    pub y_name: String,
    /// Values of the non-required columns, aligned with
    /// [`EdgeTable::extra_columns`](crate::table::EdgeTable::extra_columns).
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Edge {
    pub fn new(
        (x_id, x_type, x_name): (&str, &str, &str),
        relation: &str,
        (y_id, y_type, y_name): (&str, &str, &str),
    ) -> Self {
        Self {
            x_id: x_id.to_string(),
            x_type: x_type.to_string(),
            x_name: x_name.to_string(),
            relation: relation.to_string(),
            y_id: y_id.to_string(),
            y_type: y_type.to_string(),
            y_name: y_name.to_string(),
            extra: Vec::new(),
        }
    }

    pub fn source(&self) -> Node {
        Node::new(&self.x_id, &self.x_type, &self.x_name)
    }

    pub fn target(&self) -> Node {
        Node::new(&self.y_id, &self.y_type, &self.y_name)
    }

    /// Whether `node_id` is either endpoint.
    pub fn touches(&self, node_id: &str) -> bool {
        self.x_id == node_id || self.y_id == node_id
    }

    /// Required field values in [`REQUIRED_EDGE_COLUMNS`] order.
    pub fn required_fields(&self) -> [&str; 7] {
        [
            &self.x_id,
            &self.x_type,
            &self.x_name,
            &self.relation,
            &self.y_id,
            &self.y_type,
            &self.y_name,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_renders_all_fields() {
        let node = Node::new("DB1", "drug", "Aspirin");
        assert_eq!(node.to_string(), "DB1\tdrug\tAspirin");
    }

    #[test]
    fn edge_endpoints_become_nodes() {
        let edge = Edge::new(
            ("DB1", "drug", "Aspirin"),
            "targets",
            ("PTGS1", "protein", "PTGS1"),
        );
        assert_eq!(edge.source(), Node::new("DB1", "drug", "Aspirin"));
        assert_eq!(edge.target().node_type, "protein");
        assert!(edge.touches("PTGS1"));
        assert!(!edge.touches("PTGS2"));
    }
}
