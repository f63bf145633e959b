//! Recent conversations tool definition.
//!
//! Returns the newest conversation records, ordered by timestamp.

use mongodb::bson::Document;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{
    CONVERSATIONS_COLLECTION, TIMESTAMP_FIELD, clamp_limit, descriptor, render_json,
};
use crate::domains::store::{DocumentStore, SortSpec, documents_to_json};
use crate::domains::tools::ToolError;
use crate::domains::tools::schema::SchemaNode;

fn default_limit() -> f64 {
    RecentConversationsTool::DEFAULT_LIMIT
}

/// Arguments for the recent conversations tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecentConversationsArgs {
    #[schemars(
        description = "Number of recent conversations to retrieve (defaults to 5, clamped to 1-1000)"
    )]
    #[serde(default = "default_limit")]
    pub limit: f64,
}

/// Recent conversations tool - newest first.
pub struct RecentConversationsTool;

impl RecentConversationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_recent_conversations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get recent conversations from the database";

    /// Default number of conversations returned.
    pub const DEFAULT_LIMIT: f64 = 5.0;

    pub fn schema() -> SchemaNode {
        SchemaNode::of::<RecentConversationsArgs>()
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        args: RecentConversationsArgs,
        store: &dyn DocumentStore,
    ) -> Result<String, ToolError> {
        let limit = clamp_limit(args.limit);
        let docs = store
            .find_sorted(
                CONVERSATIONS_COLLECTION,
                Document::new(),
                SortSpec::descending(TIMESTAMP_FIELD),
                limit,
            )
            .await?;
        info!("Fetched {} recent conversations", docs.len());

        render_json(&documents_to_json(docs))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor(Self::NAME, Self::DESCRIPTION, &Self::schema())
    }
}
