//! Query engine: read-only lookups over the node and edge tables.
//!
//! The engine is either unloaded (no graph; every operation answers
//! [`NOT_LOADED`]) or loaded. It only moves to loaded through a
//! successful load, and a failed reload keeps the current graph.

use primekg_core::filter::{contains_any, Filter, Needle};
use primekg_core::loader;
use primekg_core::render;
use primekg_core::table::KnowledgeGraph;
use primekg_core::types::{Edge, Node};
use std::path::Path;
use tracing::{info, warn};

/// Answer to every operation while no graph is loaded.
pub const NOT_LOADED: &str =
    "PrimeKG data not loaded. Please download from: https://github.com/mims-harvard/PrimeKG";

const DRUG_TYPE: &str = "drug";
const DISEASE_TYPE: &str = "disease";
const TARGET_RELATIONS: [&str; 2] = ["target", "protein"];
const GENE_RELATIONS: [&str; 2] = ["gene", "associated"];

/// Lookup engine owning the current graph, if any.
#[derive(Debug, Default)]
pub struct QueryEngine {
    graph: Option<KnowledgeGraph>,
}

impl QueryEngine {
    /// An engine with no data.
    pub fn unloaded() -> Self {
        Self { graph: None }
    }

    pub fn loaded(graph: KnowledgeGraph) -> Self {
        Self { graph: Some(graph) }
    }

    /// Load `kg.csv` from `data_dir`; unloaded if that fails.
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            graph: loader::load(data_dir),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.graph.is_some()
    }

    pub fn graph(&self) -> Option<&KnowledgeGraph> {
        self.graph.as_ref()
    }

    /// Replace the graph with a freshly loaded one.
    ///
    /// `None` (a failed load) leaves the engine as it was. Returns whether
    /// the graph was replaced.
    pub fn reload(&mut self, graph: Option<KnowledgeGraph>) -> bool {
        match graph {
            Some(graph) => {
                info!(
                    "Reloaded graph: {} nodes, {} edges",
                    graph.nodes().len(),
                    graph.edges().len()
                );
                self.graph = Some(graph);
                true
            }
            None => {
                warn!("Reload failed; keeping the current graph");
                false
            }
        }
    }

    fn with_graph(&self, op: impl FnOnce(&KnowledgeGraph) -> String) -> String {
        match &self.graph {
            Some(graph) => op(graph),
            None => NOT_LOADED.to_string(),
        }
    }

    /// Nodes whose rendered record contains `query`, ignoring case.
    ///
    /// `node_type` additionally requires a case-insensitive type match.
    pub fn search_nodes(&self, query: &str, node_type: Option<&str>, limit: usize) -> String {
        self.with_graph(|graph| {
            let needle = Needle::new(query);
            let wanted_type = non_empty(node_type).map(Needle::new);

            let hits = Filter::new()
                .with(|n: &Node| needle.found_in(&n.to_string()))
                .with_optional(wanted_type.as_ref(), |t| move |n: &Node| t.equals(&n.node_type))
                .select(graph.nodes().rows(), Some(limit));

            if hits.is_empty() {
                return format!("No nodes found matching query: {}", query);
            }
            format!("Found {} nodes:\n\n{}", hits.len(), render::node_rows(&hits))
        })
    }

    /// Edges with `node_id` at either end, optionally of one relation.
    pub fn get_node_relationships(
        &self,
        node_id: &str,
        relationship_type: Option<&str>,
        limit: usize,
    ) -> String {
        self.with_graph(|graph| {
            let relation = non_empty(relationship_type).map(Needle::new);

            let hits = Filter::new()
                .with_optional(relation.as_ref(), |r| move |e: &Edge| r.equals(&e.relation))
                .select(graph.edges().touching(node_id), Some(limit));

            if hits.is_empty() {
                return format!("No relationships found for node: {}", node_id);
            }
            format!(
                "Found {} relationships:\n\n{}",
                hits.len(),
                render::edge_rows(graph.edges(), &hits)
            )
        })
    }

    /// Target/protein edges leaving the first drug whose name contains `drug_name`.
    ///
    /// No limit: every matching edge is returned.
    pub fn find_drug_targets(&self, drug_name: &str) -> String {
        self.with_graph(|graph| {
            let Some(drug) = first_named(graph, DRUG_TYPE, drug_name) else {
                return format!("Drug not found: {}", drug_name);
            };

            let hits = Filter::new()
                .with(|e: &Edge| e.x_id == drug.node_id)
                .with(|e: &Edge| contains_any(&e.relation, &TARGET_RELATIONS))
                .select(graph.edges().touching(&drug.node_id), None);

            if hits.is_empty() {
                return format!("No targets found for drug: {}", drug_name);
            }
            format!(
                "Found {} targets for {}:\n\n{}",
                hits.len(),
                drug_name,
                render::edge_rows(graph.edges(), &hits)
            )
        })
    }

    /// Gene/association edges touching the first disease whose name contains `disease_name`.
    pub fn find_disease_genes(&self, disease_name: &str, limit: usize) -> String {
        self.with_graph(|graph| {
            let Some(disease) = first_named(graph, DISEASE_TYPE, disease_name) else {
                return format!("Disease not found: {}", disease_name);
            };

            let hits = Filter::new()
                .with(|e: &Edge| contains_any(&e.relation, &GENE_RELATIONS))
                .select(graph.edges().touching(&disease.node_id), Some(limit));

            if hits.is_empty() {
                return format!("No genes found for disease: {}", disease_name);
            }
            format!(
                "Found {} genes for {}:\n\n{}",
                hits.len(),
                disease_name,
                render::edge_rows(graph.edges(), &hits)
            )
        })
    }

    /// Always the same explanation: path finding needs a traversal backend.
    pub fn find_drug_disease_paths(
        &self,
        drug_name: &str,
        disease_name: &str,
        _max_path_length: usize,
    ) -> String {
        self.with_graph(|_| {
            format!(
                "Path finding between {} and {} requires graph traversal algorithms. \
                 Consider using Neo4j backend for complex path queries.",
                drug_name, disease_name
            )
        })
    }

    /// The node with id `node_id`, or else every node whose name contains it.
    pub fn get_node_details(&self, node_id: &str) -> String {
        self.with_graph(|graph| {
            let hits = match graph.nodes().get(node_id) {
                Some(exact) => vec![exact],
                None => {
                    let name = Needle::new(node_id);
                    let by_name = Filter::new()
                        .with(|n: &Node| name.found_in(&n.node_name))
                        .select(graph.nodes().rows(), None);
                    by_name
                }
            };

            if hits.is_empty() {
                return format!("Node not found: {}", node_id);
            }
            format!("Node details:\n\n{}", render::node_rows(&hits))
        })
    }
}

/// First node of `node_type` whose name contains `name`, in table order.
fn first_named<'g>(graph: &'g KnowledgeGraph, node_type: &str, name: &str) -> Option<&'g Node> {
    let name = Needle::new(name);
    let hit = Filter::new()
        .with(|n: &Node| n.node_type == node_type)
        .with(|n: &Node| name.found_in(&n.node_name))
        .first(graph.nodes().rows())
        .map(|(_, node)| node);
    hit
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(csv: &str) -> QueryEngine {
        QueryEngine::loaded(loader::from_reader(csv.as_bytes()).unwrap())
    }

    const HEADER: &str = "x_id,x_type,x_name,relation,y_id,y_type,y_name\n";

    #[test]
    fn empty_node_type_means_no_filter() {
        let e = engine(&format!("{HEADER}DB1,drug,Aspirin,targets,P1,protein,PTGS1\n"));
        assert!(e.search_nodes("aspirin", Some(""), 10).starts_with("Found 1 nodes"));
    }

    #[test]
    fn search_matches_any_field() {
        let e = engine(&format!("{HEADER}DB1,drug,Aspirin,targets,P1,protein,PTGS1\n"));
        let by_id = e.search_nodes("db1", None, 10);
        assert!(by_id.starts_with("Found 1 nodes"), "{by_id}");
        let by_type = e.search_nodes("PROTEIN", None, 10);
        assert!(by_type.contains("PTGS1"));
    }

    #[test]
    fn relationship_filter_is_exact() {
        let e = engine(&format!(
            "{HEADER}DB1,drug,Aspirin,drug_protein,P1,protein,PTGS1\n\
             DB1,drug,Aspirin,indication,D1,disease,Pain\n"
        ));
        assert!(e
            .get_node_relationships("DB1", Some("DRUG_PROTEIN"), 50)
            .starts_with("Found 1 relationships"));
        assert_eq!(
            e.get_node_relationships("DB1", Some("drug"), 50),
            "No relationships found for node: DB1"
        );
    }

    #[test]
    fn drug_targets_only_follow_outgoing_edges() {
        let e = engine(&format!(
            "{HEADER}DB1,drug,Aspirin,targets,P1,protein,PTGS1\n\
             P9,protein,X,targets,DB1,drug,Aspirin\n"
        ));
        assert!(e.find_drug_targets("Aspirin").starts_with("Found 1 targets for Aspirin"));
    }

    #[test]
    fn drug_without_target_edges() {
        let e = engine(&format!("{HEADER}DB1,drug,Aspirin,indication,D1,disease,Pain\n"));
        assert_eq!(e.find_drug_targets("aspirin"), "No targets found for drug: aspirin");
    }

    #[test]
    fn disease_genes_are_undirected() {
        let e = engine(&format!(
            "{HEADER}G1,gene/protein,APP,disease_protein,D1,disease,Alzheimer disease\n\
             D1,disease,Alzheimer disease,associated_with,G2,gene/protein,PSEN1\n\
             D1,disease,Alzheimer disease,phenotype,H1,phenotype,Memory loss\n"
        ));
        let out = e.find_disease_genes("alzheimer", 50);
        assert!(out.starts_with("Found 1 genes for alzheimer"), "{out}");

        let e = engine(&format!(
            "{HEADER}G1,gene/protein,APP,gene_disease,D1,disease,Alzheimer disease\n\
             D1,disease,Alzheimer disease,associated_with,G2,gene/protein,PSEN1\n"
        ));
        assert!(e.find_disease_genes("alzheimer", 50).starts_with("Found 2 genes"));
        assert!(e.find_disease_genes("alzheimer", 1).starts_with("Found 1 genes"));
        assert_eq!(e.find_disease_genes("gout", 50), "Disease not found: gout");
    }

    #[test]
    fn disease_resolution_follows_node_table_order() {
        // D2 is a source while D1 only appears as a target until row 2,
        // so D2 comes first in the node table.
        let e = engine(&format!(
            "{HEADER}G1,gene/protein,IL6,associated_gene,D1,disease,Headache cluster\n\
             D2,disease,Migraine headache,associated_gene,G2,gene/protein,CGRP\n\
             D1,disease,Headache cluster,associated_gene,G1,gene/protein,IL6\n"
        ));
        let out = e.find_disease_genes("headache", 50);
        assert!(out.starts_with("Found 1 genes for headache:"), "{out}");
        assert!(out.contains("Migraine headache"), "{out}");
        assert!(!out.contains("Headache cluster"), "{out}");
    }

    #[test]
    fn details_fall_back_to_name_search() {
        let e = engine(&format!(
            "{HEADER}DB1,drug,Aspirin,targets,P1,protein,PTGS1\n\
             DB2,drug,Aspirin lysine,targets,P1,protein,PTGS1\n"
        ));
        let out = e.get_node_details("aspirin");
        assert!(out.contains("DB1") && out.contains("DB2"), "{out}");
        assert_eq!(e.get_node_details("nothing"), "Node not found: nothing");
    }

    #[test]
    fn failed_reload_keeps_graph() {
        let mut e = engine(&format!("{HEADER}DB1,drug,Aspirin,targets,P1,protein,PTGS1\n"));
        assert!(!e.reload(None));
        assert!(e.is_loaded());
        assert!(e.get_node_details("DB1").starts_with("Node details"));
    }

    #[test]
    fn reload_replaces_whole_graph() {
        let mut e = engine(&format!("{HEADER}DB1,drug,Aspirin,targets,P1,protein,PTGS1\n"));
        let next = loader::from_reader(
            format!("{HEADER}DB7,drug,Ibuprofen,targets,P2,protein,PTGS2\n").as_bytes(),
        )
        .unwrap();
        assert!(e.reload(Some(next)));
        assert_eq!(e.get_node_details("DB1"), "Node not found: DB1");
        assert!(e.get_node_details("DB7").starts_with("Node details"));
    }

    #[test]
    fn unloaded_engine_can_become_loaded() {
        let mut e = QueryEngine::unloaded();
        assert_eq!(e.search_nodes("x", None, 10), NOT_LOADED);
        let graph = loader::from_reader(
            format!("{HEADER}DB1,drug,Aspirin,targets,P1,protein,PTGS1\n").as_bytes(),
        )
        .unwrap();
        assert!(e.reload(Some(graph)));
        assert!(e.is_loaded());
    }
}
