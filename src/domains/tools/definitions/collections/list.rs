//! List collections tool definition.
//!
//! Enumerates the collections of the configured database.

use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::super::common::{descriptor, render_json};
use crate::domains::store::DocumentStore;
use crate::domains::tools::ToolError;
use crate::domains::tools::schema::SchemaNode;

/// Arguments for the list collections tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCollectionsArgs {}

/// List collections tool - takes no arguments.
pub struct ListCollectionsTool;

impl ListCollectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_collections";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all collections in the langbox database";

    /// Input schema: an empty object.
    pub fn schema() -> SchemaNode {
        SchemaNode::of::<ListCollectionsArgs>()
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(store: &dyn DocumentStore) -> Result<String, ToolError> {
        let names = store.list_collections().await?;
        info!("Listed {} collections", names.len());
        render_json(&Value::from(names))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor(Self::NAME, Self::DESCRIPTION, &Self::schema())
    }
}
