//! Tool-specific error types.

use thiserror::Error;

use crate::domains::store::StoreError;

/// Errors that can occur while dispatching or running a tool.
///
/// The display text of each variant is what the caller sees in the error
/// envelope.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments were missing or had the wrong shape.
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// The named collection does not exist in the database.
    #[error("Collection '{0}' not found")]
    CollectionNotFound(String),

    /// The store rejected or failed the query.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The result could not be rendered.
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The handler panicked.
    #[error("Tool execution failed unexpectedly")]
    Panicked,
}

impl ToolError {
    /// Create an "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create an "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a "collection not found" error.
    pub fn collection_not_found(collection: impl Into<String>) -> Self {
        Self::CollectionNotFound(collection.into())
    }

    /// Short, stable label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::CollectionNotFound(_) => "collection_not_found",
            Self::Store(_) => "store_query",
            Self::Serialization(_) => "serialization",
            Self::Panicked => "panicked",
        }
    }
}
