//! Search conversations tool definition.
//!
//! Case-insensitive match of the search text against the question and
//! answer fields. The text is used as a regular expression.

use mongodb::bson::{Bson, Document, doc};
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{
    CONVERSATIONS_COLLECTION, SEARCH_FIELDS, TIMESTAMP_FIELD, clamp_limit, descriptor,
    render_json,
};
use crate::domains::store::{DocumentStore, SortSpec, documents_to_json};
use crate::domains::tools::ToolError;
use crate::domains::tools::schema::SchemaNode;

fn default_limit() -> f64 {
    SearchConversationsTool::DEFAULT_LIMIT
}

/// Arguments for the search conversations tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchConversationsArgs {
    #[schemars(description = "Text to search for in questions or answers")]
    pub search_text: String,

    #[schemars(description = "Maximum results (defaults to 10, clamped to 1-1000)")]
    #[serde(default = "default_limit")]
    pub limit: f64,
}

/// Search conversations tool.
pub struct SearchConversationsTool;

impl SearchConversationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_conversations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search conversations by question or answer content";

    /// Default number of results.
    pub const DEFAULT_LIMIT: f64 = 10.0;

    pub fn schema() -> SchemaNode {
        SchemaNode::of::<SearchConversationsArgs>()
    }

    /// Build the `$or` filter over the searchable fields.
    pub fn build_filter(search_text: &str) -> Document {
        let branches: Vec<Bson> = SEARCH_FIELDS
            .iter()
            .map(|&field| {
                let mut branch = Document::new();
                branch.insert(field, doc! { "$regex": search_text, "$options": "i" });
                Bson::Document(branch)
            })
            .collect();
        doc! { "$or": branches }
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(search_text = %args.search_text))]
    pub async fn execute(
        args: SearchConversationsArgs,
        store: &dyn DocumentStore,
    ) -> Result<String, ToolError> {
        let filter = Self::build_filter(&args.search_text);
        let limit = clamp_limit(args.limit);

        let docs = store
            .find_sorted(
                CONVERSATIONS_COLLECTION,
                filter,
                SortSpec::descending(TIMESTAMP_FIELD),
                limit,
            )
            .await?;
        info!("Found {} matching conversations", docs.len());

        render_json(&documents_to_json(docs))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        descriptor(Self::NAME, Self::DESCRIPTION, &Self::schema())
    }
}
