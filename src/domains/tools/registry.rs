//! Tool Registry - the static catalog of available tools.
//!
//! The catalog order is the registration order below and never changes
//! during the life of the process.

use rmcp::model::{JsonObject, Tool};

use super::ToolError;
use super::definitions::common::parse_args;
use super::definitions::{
    CountDocumentsTool, ListCollectionsArgs, ListCollectionsTool, QueryCollectionTool,
    RecentConversationsTool, SearchConversationsTool,
};
use super::dispatcher::ToolCall;
use super::schema::SchemaNode;

/// Registration of one tool: its metadata and how to parse a call to it.
#[derive(Clone, Copy)]
pub struct ToolEntry {
    pub name: &'static str,
    pub to_tool: fn() -> Tool,
    pub schema: fn() -> SchemaNode,
    pub parse: fn(JsonObject) -> Result<ToolCall, ToolError>,
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - lists tools and resolves them by name.
pub struct ToolRegistry;

impl ToolRegistry {
    /// All registered tools, in registration order.
    pub fn entries() -> [ToolEntry; 5] {
        [
            ToolEntry {
                name: ListCollectionsTool::NAME,
                to_tool: ListCollectionsTool::to_tool,
                schema: ListCollectionsTool::schema,
                parse: |args| {
                    parse_args::<ListCollectionsArgs>(ListCollectionsTool::NAME, args)
                        .map(|_| ToolCall::ListCollections)
                },
            },
            ToolEntry {
                name: QueryCollectionTool::NAME,
                to_tool: QueryCollectionTool::to_tool,
                schema: QueryCollectionTool::schema,
                parse: |args| {
                    parse_args(QueryCollectionTool::NAME, args).map(ToolCall::QueryCollection)
                },
            },
            ToolEntry {
                name: CountDocumentsTool::NAME,
                to_tool: CountDocumentsTool::to_tool,
                schema: CountDocumentsTool::schema,
                parse: |args| {
                    parse_args(CountDocumentsTool::NAME, args).map(ToolCall::CountDocuments)
                },
            },
            ToolEntry {
                name: RecentConversationsTool::NAME,
                to_tool: RecentConversationsTool::to_tool,
                schema: RecentConversationsTool::schema,
                parse: |args| {
                    parse_args(RecentConversationsTool::NAME, args)
                        .map(ToolCall::GetRecentConversations)
                },
            },
            ToolEntry {
                name: SearchConversationsTool::NAME,
                to_tool: SearchConversationsTool::to_tool,
                schema: SearchConversationsTool::schema,
                parse: |args| {
                    parse_args(SearchConversationsTool::NAME, args)
                        .map(ToolCall::SearchConversations)
                },
            },
        ]
    }

    /// Look up a registered tool by name.
    pub fn find(name: &str) -> Option<ToolEntry> {
        Self::entries().into_iter().find(|entry| entry.name == name)
    }

    /// Get all tool names in registration order.
    pub fn tool_names() -> Vec<&'static str> {
        Self::entries().iter().map(|entry| entry.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for `tools/list` on every transport.
    pub fn get_all_tools() -> Vec<Tool> {
        Self::entries().iter().map(|entry| (entry.to_tool)()).collect()
    }

    /// Look up the input schema of a registered tool.
    pub fn schema_for(name: &str) -> Option<SchemaNode> {
        Self::find(name).map(|entry| (entry.schema)())
    }
}
