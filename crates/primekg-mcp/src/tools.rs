//! MCP tool and resource definitions for the PrimeKG knowledge graph.
//!
//! Each tool maps onto one `primekg_query::Operation`; the two resources
//! map onto `primekg_query::Resource`. Everything is answered as plain text.

use crate::worker::GraphHandle;
use primekg::prelude::{
    DiseaseGenesRequest, DrugDiseasePathsRequest, DrugTargetsRequest, NodeDetailsRequest,
    NodeRelationshipsRequest, Operation, Resource, SearchNodesRequest,
};
use primekg::primekg_query::ops::{
    default_max_path_length, default_relationship_limit, default_search_limit,
};
use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    schemars, service::RequestContext, tool, tool_handler, tool_router, RoleServer,
    ServerHandler,
};
use serde::Deserialize;
use std::borrow::Cow;

type McpError = rmcp::model::ErrorData;

pub const DEFAULT_INSTRUCTIONS: &str = "Query the PrimeKG knowledge graph for precision medicine \
     insights, including drug-disease-gene relationships.";

/// MCP tool router for PrimeKG lookups.
#[derive(Clone)]
pub struct PrimeKgTools {
    tool_router: ToolRouter<PrimeKgTools>,
    handle: GraphHandle,
    instructions: String,
}

impl std::fmt::Debug for PrimeKgTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimeKgTools").finish()
    }
}

// === Tool parameter types (JSON Schema via schemars) ===

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchNodesParams {
    /// Search query (gene name, drug name, disease name, etc.)
    pub query: String,
    /// Filter by node type (gene/protein, drug, disease, etc.)
    pub node_type: Option<String>,
    /// Maximum number of results (default: 10).
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NodeRelationshipsParams {
    /// Node ID to get relationships for.
    pub node_id: String,
    /// Filter by relationship type.
    pub relationship_type: Option<String>,
    /// Maximum number of results (default: 50).
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DrugTargetsParams {
    /// Drug name to search for.
    pub drug_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DiseaseGenesParams {
    /// Disease name to search for.
    pub disease_name: String,
    /// Maximum number of results (default: 50).
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DrugDiseasePathsParams {
    /// Drug name.
    pub drug_name: String,
    /// Disease name.
    pub disease_name: String,
    /// Maximum path length (default: 3).
    pub max_path_length: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NodeDetailsParams {
    /// Node ID (or a name fragment) to look up.
    pub node_id: String,
}

impl From<SearchNodesParams> for Operation {
    fn from(p: SearchNodesParams) -> Self {
        Operation::SearchNodes(SearchNodesRequest {
            query: p.query,
            node_type: p.node_type,
            limit: p.limit.unwrap_or_else(default_search_limit),
        })
    }
}

impl From<NodeRelationshipsParams> for Operation {
    fn from(p: NodeRelationshipsParams) -> Self {
        Operation::GetNodeRelationships(NodeRelationshipsRequest {
            node_id: p.node_id,
            relationship_type: p.relationship_type,
            limit: p.limit.unwrap_or_else(default_relationship_limit),
        })
    }
}

impl From<DrugTargetsParams> for Operation {
    fn from(p: DrugTargetsParams) -> Self {
        Operation::FindDrugTargets(DrugTargetsRequest {
            drug_name: p.drug_name,
        })
    }
}

impl From<DiseaseGenesParams> for Operation {
    fn from(p: DiseaseGenesParams) -> Self {
        Operation::FindDiseaseGenes(DiseaseGenesRequest {
            disease_name: p.disease_name,
            limit: p.limit.unwrap_or_else(default_relationship_limit),
        })
    }
}

impl From<DrugDiseasePathsParams> for Operation {
    fn from(p: DrugDiseasePathsParams) -> Self {
        Operation::FindDrugDiseasePaths(DrugDiseasePathsRequest {
            drug_name: p.drug_name,
            disease_name: p.disease_name,
            max_path_length: p.max_path_length.unwrap_or_else(default_max_path_length),
        })
    }
}

impl From<NodeDetailsParams> for Operation {
    fn from(p: NodeDetailsParams) -> Self {
        Operation::GetNodeDetails(NodeDetailsRequest { node_id: p.node_id })
    }
}

/// Resource listing entry for one of the read-only documents.
pub fn resource_entry(resource: Resource) -> rmcp::model::Resource {
    let mut raw = RawResource::new(resource.uri(), resource.title());
    raw.description = Some(resource.description().to_string());
    raw.mime_type = Some("text/plain".to_string());
    raw.no_annotation()
}

#[tool_router]
impl PrimeKgTools {
    pub fn new(handle: GraphHandle, instructions: impl Into<String>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            handle,
            instructions: instructions.into(),
        }
    }

    async fn run(&self, op: Operation) -> Result<CallToolResult, McpError> {
        let name = op.name();
        let text = self.handle.execute(op).await.map_err(|e| McpError {
            code: ErrorCode::INTERNAL_ERROR,
            message: Cow::from(format!("{name} failed: {e}")),
            data: None,
        })?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "search_nodes",
        description = "Search for nodes in PrimeKG by name or type (genes, drugs, diseases, etc.)"
    )]
    async fn search_nodes(
        &self,
        params: Parameters<SearchNodesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(params.0.into()).await
    }

    #[tool(
        name = "get_node_relationships",
        description = "Get all relationships for a specific node"
    )]
    async fn get_node_relationships(
        &self,
        params: Parameters<NodeRelationshipsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(params.0.into()).await
    }

    #[tool(
        name = "find_drug_targets",
        description = "Find protein targets for a specific drug"
    )]
    async fn find_drug_targets(
        &self,
        params: Parameters<DrugTargetsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(params.0.into()).await
    }

    #[tool(
        name = "find_disease_genes",
        description = "Find genes associated with a specific disease"
    )]
    async fn find_disease_genes(
        &self,
        params: Parameters<DiseaseGenesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(params.0.into()).await
    }

    #[tool(
        name = "find_drug_disease_paths",
        description = "Find paths between drugs and diseases through the knowledge graph"
    )]
    async fn find_drug_disease_paths(
        &self,
        params: Parameters<DrugDiseasePathsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(params.0.into()).await
    }

    #[tool(
        name = "get_node_details",
        description = "Get detailed information about a specific node"
    )]
    async fn get_node_details(
        &self,
        params: Parameters<NodeDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(params.0.into()).await
    }
}

#[tool_handler]
impl ServerHandler for PrimeKgTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "primekg".into(),
                title: Some("PrimeKG Knowledge Graph".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                description: Some(
                    "Precision medicine knowledge graph of genes, drugs, diseases and pathways"
                        .into(),
                ),
                icons: None,
                website_url: Some("https://github.com/mims-harvard/PrimeKG".into()),
            },
            instructions: Some(self.instructions.clone()),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(
            Resource::ALL.into_iter().map(resource_entry).collect(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let resource = Resource::from_uri(&request.uri).map_err(|e| McpError {
            code: ErrorCode::RESOURCE_NOT_FOUND,
            message: Cow::from(e.to_string()),
            data: None,
        })?;
        let text = self.handle.read(resource).await.map_err(|e| McpError {
            code: ErrorCode::INTERNAL_ERROR,
            message: Cow::from(format!("Reading {} failed: {e}", request.uri)),
            data: None,
        })?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primekg::prelude::QueryEngine;

    #[test]
    fn omitted_limits_take_defaults() {
        let op: Operation = SearchNodesParams {
            query: "aspirin".into(),
            node_type: None,
            limit: None,
        }
        .into();
        assert_eq!(
            op,
            Operation::SearchNodes(SearchNodesRequest {
                query: "aspirin".into(),
                node_type: None,
                limit: 10,
            })
        );

        let op: Operation = DiseaseGenesParams {
            disease_name: "asthma".into(),
            limit: None,
        }
        .into();
        assert_eq!(
            op,
            Operation::FindDiseaseGenes(DiseaseGenesRequest {
                disease_name: "asthma".into(),
                limit: 50,
            })
        );

        let op: Operation = DrugDiseasePathsParams {
            drug_name: "a".into(),
            disease_name: "b".into(),
            max_path_length: None,
        }
        .into();
        assert_eq!(op.name(), "find_drug_disease_paths");
    }

    #[test]
    fn explicit_limits_pass_through() {
        let op: Operation = NodeRelationshipsParams {
            node_id: "DB1".into(),
            relationship_type: Some("indication".into()),
            limit: Some(3),
        }
        .into();
        assert_eq!(
            op,
            Operation::GetNodeRelationships(NodeRelationshipsRequest {
                node_id: "DB1".into(),
                relationship_type: Some("indication".into()),
                limit: 3,
            })
        );
    }

    #[test]
    fn resources_are_listed_as_text() {
        let entries: Vec<_> = Resource::ALL.into_iter().map(resource_entry).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].uri, "primekg://schema");
        assert_eq!(entries[1].uri, "primekg://statistics");
        assert!(entries
            .iter()
            .all(|e| e.mime_type.as_deref() == Some("text/plain")));
    }

    #[test]
    fn server_info_advertises_tools_and_resources() {
        let tools = PrimeKgTools::new(
            GraphHandle::spawn_with(QueryEngine::unloaded),
            DEFAULT_INSTRUCTIONS,
        );
        let info = tools.get_info();
        assert_eq!(info.server_info.name, "primekg");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert_eq!(info.instructions.as_deref(), Some(DEFAULT_INSTRUCTIONS));
    }
}
