//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are read-only queries against the document store that MCP clients
//! can call by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Read-only view over the generated input schemas
//! - `registry.rs` - The static, ordered tool catalog
//! - `dispatcher.rs` - Name resolution, typed parsing and the result envelope
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with an args struct deriving
//!    `Deserialize` and `JsonSchema`, plus NAME, schema(), execute()
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolCall` variant in `dispatcher.rs`
//! 4. Add a `ToolEntry` in `registry.rs`

pub mod definitions;
mod dispatcher;
mod error;
mod registry;
pub mod schema;

pub use dispatcher::{Dispatcher, ToolCall, ToolInvocation};
pub use error::ToolError;
pub use registry::{ToolEntry, ToolRegistry};
pub use schema::{SchemaNode, SchemaType};
