//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod collections;
pub mod common;
pub mod conversations;

pub use collections::{
    CountDocumentsArgs, CountDocumentsTool, ListCollectionsArgs, ListCollectionsTool,
    QueryCollectionArgs, QueryCollectionTool,
};
pub use conversations::{
    RecentConversationsArgs, RecentConversationsTool, SearchConversationsArgs,
    SearchConversationsTool,
};
