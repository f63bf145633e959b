//! Count documents tool definition.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{descriptor, ensure_collection, to_filter_document};
use crate::domains::store::DocumentStore;
use crate::domains::tools::ToolError;
use crate::domains::tools::schema::SchemaNode;

/// Arguments for the count documents tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CountDocumentsArgs {
    #[schemars(description = "Collection name")]
    pub collection: String,

    #[schemars(description = "MongoDB query filter (optional, defaults to {})")]
    #[serde(default)]
    pub filter: JsonObject,
}

/// Count documents tool - counts documents matching a filter.
pub struct CountDocumentsTool;

impl CountDocumentsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "count_documents";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Count documents in a collection matching a filter";

    pub fn schema() -> SchemaNode {
        SchemaNode::of::<CountDocumentsArgs>()
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(collection = %args.collection))]
    pub async fn execute(
        args: CountDocumentsArgs,
        store: &dyn DocumentStore,
    ) -> Result<String, ToolError> {
        ensure_collection(store, &args.collection).await?;

        let filter = to_filter_document(Self::NAME, args.filter)?;
        let count = store.count(&args.collection, filter).await?;
        info!("Counted {} documents in {}", count, args.collection);
        Ok(format!("Count: {count}"))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor(Self::NAME, Self::DESCRIPTION, &Self::schema())
    }
}
