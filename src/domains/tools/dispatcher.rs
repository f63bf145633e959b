//! Tool dispatcher - routes a tool call to its handler.
//!
//! An incoming call is a name plus an untyped argument object. The dispatcher
//! resolves the name against the registry, parses the arguments into the
//! tool's typed struct (serde fills in defaults), runs the handler
//! against the store, and wraps the outcome in a `CallToolResult`.
//!
//! Every failure, including a panicking handler, is turned into an error
//! result here. Nothing escapes `dispatch`.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{debug, instrument, warn};

use super::ToolError;
use super::definitions::{
    CountDocumentsArgs, CountDocumentsTool, ListCollectionsTool, QueryCollectionArgs,
    QueryCollectionTool, RecentConversationsArgs, RecentConversationsTool,
    SearchConversationsArgs, SearchConversationsTool,
};
use super::registry::ToolRegistry;
use crate::domains::store::DocumentStore;

/// A single tool call as received from the transport.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub name: String,
    pub arguments: JsonObject,
}

impl ToolInvocation {
    /// Create an invocation; absent arguments are treated as `{}`.
    pub fn new(name: impl Into<String>, arguments: Option<JsonObject>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.unwrap_or_default(),
        }
    }
}

/// A tool call with typed, defaulted arguments.
#[derive(Debug, Clone)]
pub enum ToolCall {
    ListCollections,
    QueryCollection(QueryCollectionArgs),
    CountDocuments(CountDocumentsArgs),
    GetRecentConversations(RecentConversationsArgs),
    SearchConversations(SearchConversationsArgs),
}

impl ToolCall {
    /// Resolve the tool and parse its arguments.
    pub fn parse(invocation: ToolInvocation) -> Result<Self, ToolError> {
        let ToolInvocation { name, arguments } = invocation;
        let entry = ToolRegistry::find(&name).ok_or_else(|| ToolError::unknown_tool(&name))?;
        (entry.parse)(arguments)
    }

    /// Name of the tool this call targets.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListCollections => ListCollectionsTool::NAME,
            Self::QueryCollection(_) => QueryCollectionTool::NAME,
            Self::CountDocuments(_) => CountDocumentsTool::NAME,
            Self::GetRecentConversations(_) => RecentConversationsTool::NAME,
            Self::SearchConversations(_) => SearchConversationsTool::NAME,
        }
    }

    /// Run the handler and return its text output.
    pub async fn execute(self, store: &dyn DocumentStore) -> Result<String, ToolError> {
        match self {
            Self::ListCollections => ListCollectionsTool::execute(store).await,
            Self::QueryCollection(args) => QueryCollectionTool::execute(args, store).await,
            Self::CountDocuments(args) => CountDocumentsTool::execute(args, store).await,
            Self::GetRecentConversations(args) => {
                RecentConversationsTool::execute(args, store).await
            }
            Self::SearchConversations(args) => SearchConversationsTool::execute(args, store).await,
        }
    }
}

/// Routes invocations to tool handlers and builds the result envelope.
pub struct Dispatcher;

impl Dispatcher {
    /// Dispatch one invocation. Always returns a result; never fails.
    #[instrument(skip_all, fields(tool = %invocation.name))]
    pub async fn dispatch(store: &dyn DocumentStore, invocation: ToolInvocation) -> CallToolResult {
        let outcome = AssertUnwindSafe(Self::run(store, invocation))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(ToolError::Panicked));

        match outcome {
            Ok(text) => {
                debug!("Tool call succeeded");
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(e) => {
                warn!(kind = e.kind(), "Tool call failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    async fn run(store: &dyn DocumentStore, invocation: ToolInvocation) -> Result<String, ToolError> {
        let call = ToolCall::parse(invocation)?;
        debug!("Resolved tool call: {}", call.name());
        call.execute(store).await
    }
}
