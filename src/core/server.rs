//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by binding the tool registry and dispatcher to `tools/list` and
//! `tools/call`.
//!
//! ## Call flow
//!
//! `tools/list` is answered from the static registry and never touches the
//! store. `tools/call` first makes sure the store gateway is connected
//! (connecting lazily on the first call of the process), then hands the call
//! to the dispatcher. A connection failure fails only that request; the next
//! call tries to connect again.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::Result;
use super::config::Config;
use crate::domains::store::{MongoConnector, StoreGateway};
use crate::domains::tools::{Dispatcher, ToolInvocation, ToolRegistry};

/// The main MCP server handler.
///
/// Cloning is cheap; clones share the configuration and the store gateway.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Lazily connected store access shared by all calls.
    gateway: Arc<StoreGateway>,
}

impl McpServer {
    /// Create a new MCP server backed by MongoDB.
    pub fn new(config: Config) -> Self {
        let connector =
            MongoConnector::new(config.database.clone(), config.server.name.clone());
        let gateway = StoreGateway::new(Arc::new(connector));
        Self::with_gateway(config, gateway)
    }

    /// Create a server around an existing gateway.
    pub fn with_gateway(config: Config, gateway: StoreGateway) -> Self {
        Self {
            config: Arc::new(config),
            gateway: Arc::new(gateway),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the store gateway.
    pub fn gateway(&self) -> &Arc<StoreGateway> {
        &self.gateway
    }

    /// Run one tool call: connect if needed, then dispatch.
    ///
    /// Only a store connection failure is returned as `Err`; every other
    /// outcome is an `Ok` result, possibly flagged as an error.
    pub async fn invoke(&self, name: &str, arguments: Option<JsonObject>) -> Result<CallToolResult> {
        let store = self.gateway.connect().await?;
        Ok(Dispatcher::dispatch(store.as_ref(), ToolInvocation::new(name, arguments)).await)
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools_json(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return the result envelope as JSON (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool_json(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<serde_json::Value> {
        let result = self.invoke(name, arguments).await?;
        Ok(serde_json::to_value(&result)?)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only access to the langbox MongoDB database. List collections, \
                 query or count documents, and browse or search stored conversations."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.invoke(&request.name, request.arguments)
            .await
            .map_err(|e| {
                error!("Tool call aborted: {}", e);
                McpError::internal_error(e.to_string(), None)
            })
    }
}
