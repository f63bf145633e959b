//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for failures that escape a single
//! tool call: store connection problems, transport failures, and protocol
//! serialization errors. Failures inside a tool call never reach this type;
//! the dispatcher turns them into error results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the store domain (e.g. connection failure).
    #[error("Store error: {0}")]
    Store(#[from] crate::domains::store::StoreError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
