//! MongoDB MCP Server Library
//!
//! A Model Context Protocol (MCP) server that gives AI clients read-only
//! access to a MongoDB database through five tools: listing collections,
//! querying and counting documents, and browsing or searching the stored
//! conversation history.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **store**: the document store abstraction, its MongoDB backend and the
//!     lazily connected gateway
//!   - **tools**: the tool catalog, argument schemas and the dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use mongo_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
