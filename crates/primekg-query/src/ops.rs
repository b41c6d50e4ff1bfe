//! Operation and resource boundary.
//!
//! Transports hand over an operation name plus a map of named arguments,
//! or a resource URI. Unknown names are the only hard errors here; data
//! conditions always come back as text.

use crate::engine::QueryEngine;
use crate::summary;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Rejected requests. These signal caller misuse, not a data condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Invalid arguments for {operation}: {reason}")]
    InvalidArguments { operation: String, reason: String },
}

// === Request types ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchNodesRequest {
    pub query: String,
    #[serde(default)]
    pub node_type: Option<String>,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRelationshipsRequest {
    pub node_id: String,
    #[serde(default)]
    pub relationship_type: Option<String>,
    #[serde(default = "default_relationship_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugTargetsRequest {
    pub drug_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseGenesRequest {
    pub disease_name: String,
    #[serde(default = "default_relationship_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugDiseasePathsRequest {
    pub drug_name: String,
    pub disease_name: String,
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDetailsRequest {
    pub node_id: String,
}

pub fn default_search_limit() -> usize { 10 }
pub fn default_relationship_limit() -> usize { 50 }
pub fn default_max_path_length() -> usize { 3 }

/// One of the six lookup operations, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    SearchNodes(SearchNodesRequest),
    GetNodeRelationships(NodeRelationshipsRequest),
    FindDrugTargets(DrugTargetsRequest),
    FindDiseaseGenes(DiseaseGenesRequest),
    FindDrugDiseasePaths(DrugDiseasePathsRequest),
    GetNodeDetails(NodeDetailsRequest),
}

impl Operation {
    pub const NAMES: [&'static str; 6] = [
        "search_nodes",
        "get_node_relationships",
        "find_drug_targets",
        "find_disease_genes",
        "find_drug_disease_paths",
        "get_node_details",
    ];

    /// Build an operation from its name and a JSON object of arguments.
    ///
    /// `null` arguments count as an empty object.
    pub fn parse(name: &str, arguments: Value) -> Result<Self, QueryError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        match name {
            "search_nodes" => args(name, arguments).map(Operation::SearchNodes),
            "get_node_relationships" => args(name, arguments).map(Operation::GetNodeRelationships),
            "find_drug_targets" => args(name, arguments).map(Operation::FindDrugTargets),
            "find_disease_genes" => args(name, arguments).map(Operation::FindDiseaseGenes),
            "find_drug_disease_paths" => args(name, arguments).map(Operation::FindDrugDiseasePaths),
            "get_node_details" => args(name, arguments).map(Operation::GetNodeDetails),
            other => Err(QueryError::UnknownOperation(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::SearchNodes(_) => "search_nodes",
            Operation::GetNodeRelationships(_) => "get_node_relationships",
            Operation::FindDrugTargets(_) => "find_drug_targets",
            Operation::FindDiseaseGenes(_) => "find_disease_genes",
            Operation::FindDrugDiseasePaths(_) => "find_drug_disease_paths",
            Operation::GetNodeDetails(_) => "get_node_details",
        }
    }
}

fn args<T: DeserializeOwned>(operation: &str, arguments: Value) -> Result<T, QueryError> {
    serde_json::from_value(arguments).map_err(|e| QueryError::InvalidArguments {
        operation: operation.to_string(),
        reason: e.to_string(),
    })
}

/// The two read-only resource documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Schema,
    Statistics,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Schema, Resource::Statistics];

    pub fn from_uri(uri: &str) -> Result<Self, QueryError> {
        Self::ALL
            .into_iter()
            .find(|r| r.uri() == uri)
            .ok_or_else(|| QueryError::UnknownResource(uri.to_string()))
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Resource::Schema => "primekg://schema",
            Resource::Statistics => "primekg://statistics",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Resource::Schema => "PrimeKG Schema",
            Resource::Statistics => "PrimeKG Statistics",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Resource::Schema => "Schema and structure of the PrimeKG knowledge graph",
            Resource::Statistics => "Statistics about nodes and relationships in PrimeKG",
        }
    }
}

impl QueryEngine {
    /// Run a parsed operation.
    pub fn execute(&self, op: &Operation) -> String {
        match op {
            Operation::SearchNodes(req) => {
                self.search_nodes(&req.query, req.node_type.as_deref(), req.limit)
            }
            Operation::GetNodeRelationships(req) => self.get_node_relationships(
                &req.node_id,
                req.relationship_type.as_deref(),
                req.limit,
            ),
            Operation::FindDrugTargets(req) => self.find_drug_targets(&req.drug_name),
            Operation::FindDiseaseGenes(req) => {
                self.find_disease_genes(&req.disease_name, req.limit)
            }
            Operation::FindDrugDiseasePaths(req) => self.find_drug_disease_paths(
                &req.drug_name,
                &req.disease_name,
                req.max_path_length,
            ),
            Operation::GetNodeDetails(req) => self.get_node_details(&req.node_id),
        }
    }

    pub fn read(&self, resource: Resource) -> String {
        match resource {
            Resource::Schema => summary::schema(),
            Resource::Statistics => summary::statistics(self),
        }
    }
}

/// Parse and run a named operation.
pub fn call(engine: &QueryEngine, name: &str, arguments: Value) -> Result<String, QueryError> {
    Operation::parse(name, arguments).map(|op| engine.execute(&op))
}

/// Read a resource by URI.
pub fn read_resource(engine: &QueryEngine, uri: &str) -> Result<String, QueryError> {
    Resource::from_uri(uri).map(|r| engine.read(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_fill_optional_arguments() {
        let op = Operation::parse("search_nodes", json!({ "query": "aspirin" })).unwrap();
        assert_eq!(
            op,
            Operation::SearchNodes(SearchNodesRequest {
                query: "aspirin".into(),
                node_type: None,
                limit: 10,
            })
        );

        let op = Operation::parse(
            "find_drug_disease_paths",
            json!({ "drug_name": "a", "disease_name": "b" }),
        )
        .unwrap();
        match op {
            Operation::FindDrugDiseasePaths(req) => assert_eq!(req.max_path_length, 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn every_name_round_trips() {
        let samples = [
            json!({ "query": "q" }),
            json!({ "node_id": "n" }),
            json!({ "drug_name": "d" }),
            json!({ "disease_name": "d" }),
            json!({ "drug_name": "d", "disease_name": "e" }),
            json!({ "node_id": "n" }),
        ];
        for (name, arguments) in Operation::NAMES.iter().zip(samples) {
            assert_eq!(Operation::parse(name, arguments).unwrap().name(), *name);
        }
    }

    #[test]
    fn unknown_operation_is_rejected() {
        assert_eq!(
            call(&QueryEngine::unloaded(), "drop_tables", Value::Null),
            Err(QueryError::UnknownOperation("drop_tables".into()))
        );
    }

    #[test]
    fn missing_required_argument_is_rejected() {
        let err = Operation::parse("find_drug_targets", Value::Null).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArguments { ref operation, .. } if operation == "find_drug_targets"));
    }

    #[test]
    fn resources_by_uri() {
        let engine = QueryEngine::unloaded();
        assert!(read_resource(&engine, "primekg://schema").unwrap().starts_with("PrimeKG Schema"));
        assert_eq!(
            read_resource(&engine, "primekg://edges"),
            Err(QueryError::UnknownResource("primekg://edges".into()))
        );
    }
}
