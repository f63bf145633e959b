//! Query collection tool definition.
//!
//! Finds documents in any collection using a caller-supplied filter.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{
    clamp_limit, descriptor, ensure_collection, render_json, to_filter_document,
};
use crate::domains::store::{DocumentStore, documents_to_json};
use crate::domains::tools::ToolError;
use crate::domains::tools::schema::SchemaNode;

fn default_limit() -> f64 {
    QueryCollectionTool::DEFAULT_LIMIT
}

/// Arguments for the query collection tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryCollectionArgs {
    /// Collection to query.
    #[schemars(
        description = "Collection name (e.g., \"conversations\", \"weather\", \"credentials\", \"hueconfiguration\")"
    )]
    pub collection: String,

    /// MongoDB query filter, passed through unchanged.
    #[schemars(description = "MongoDB query filter (optional, defaults to {})")]
    #[serde(default)]
    pub filter: JsonObject,

    /// Maximum number of documents to return.
    #[schemars(
        description = "Maximum number of documents to return (optional, defaults to 10, clamped to 1-1000)"
    )]
    #[serde(default = "default_limit")]
    pub limit: f64,
}

/// Query collection tool - find with filter and limit.
pub struct QueryCollectionTool;

impl QueryCollectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "query_collection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Query documents from a collection with optional filter and limit";

    /// Default number of documents returned.
    pub const DEFAULT_LIMIT: f64 = 10.0;

    pub fn schema() -> SchemaNode {
        SchemaNode::of::<QueryCollectionArgs>()
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(collection = %args.collection))]
    pub async fn execute(
        args: QueryCollectionArgs,
        store: &dyn DocumentStore,
    ) -> Result<String, ToolError> {
        ensure_collection(store, &args.collection).await?;

        let filter = to_filter_document(Self::NAME, args.filter)?;
        let limit = clamp_limit(args.limit);

        let docs = store.find(&args.collection, filter, limit).await?;
        info!("Found {} documents in {}", docs.len(), args.collection);

        render_json(&documents_to_json(docs))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor(Self::NAME, Self::DESCRIPTION, &Self::schema())
    }
}
