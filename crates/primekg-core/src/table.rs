//! The two canonical in-memory tables and the graph that owns them.
//!
//! Both tables are built once and never mutated afterwards. A reload
//! builds a fresh [`KnowledgeGraph`] and replaces the old one whole.

use crate::types::{Edge, Node};
use std::collections::HashMap;

/// Nodes in first-seen order, unique by `node_id`.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: Vec<Node>,
    by_id: HashMap<String, usize>,
}

impl NodeTable {
    /// Build from candidate rows, keeping the first row for each `node_id`.
    pub fn from_candidates(candidates: impl IntoIterator<Item = Node>) -> Self {
        let mut table = NodeTable::default();
        for node in candidates {
            if table.by_id.contains_key(&node.node_id) {
                continue;
            }
            table.by_id.insert(node.node_id.clone(), table.nodes.len());
            table.nodes.push(node);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rows with their table position, in table order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// Exact lookup by id.
    pub fn get(&self, node_id: &str) -> Option<(usize, &Node)> {
        self.by_id
            .get(node_id)
            .map(|&pos| (pos, &self.nodes[pos]))
    }
}

/// Edges in file order, with an endpoint index.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    edges: Vec<Edge>,
    extra_columns: Vec<String>,
    /// node_id -> ascending positions of edges touching it.
    by_endpoint: HashMap<String, Vec<usize>>,
}

impl EdgeTable {
    pub fn new(edges: Vec<Edge>, extra_columns: Vec<String>) -> Self {
        let mut by_endpoint: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, edge) in edges.iter().enumerate() {
            by_endpoint.entry(edge.x_id.clone()).or_default().push(pos);
            if edge.y_id != edge.x_id {
                by_endpoint.entry(edge.y_id.clone()).or_default().push(pos);
            }
        }
        Self {
            edges,
            extra_columns,
            by_endpoint,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Headers of the pass-through columns, in file order.
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &Edge)> {
        self.edges.iter().enumerate()
    }

    /// Edges where `node_id` is either endpoint, in table order.
    pub fn touching<'a>(&'a self, node_id: &str) -> impl Iterator<Item = (usize, &'a Edge)> + 'a {
        self.by_endpoint
            .get(node_id)
            .map(|positions| positions.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&pos| (pos, &self.edges[pos]))
    }
}

/// A loaded PrimeKG graph: the edge table plus the nodes derived from it.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    nodes: NodeTable,
    edges: EdgeTable,
}

impl KnowledgeGraph {
    /// Derive the node table from the edges.
    ///
    /// All source endpoints come first, in file order, then all target
    /// endpoints. An id that appears on the source side anywhere keeps its
    /// source-side type and name.
    pub fn from_edges(edges: Vec<Edge>, extra_columns: Vec<String>) -> Self {
        let nodes = NodeTable::from_candidates(
            edges
                .iter()
                .map(Edge::source)
                .chain(edges.iter().map(Edge::target)),
        );
        Self {
            nodes,
            edges: EdgeTable::new(edges, extra_columns),
        }
    }

    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }
}
