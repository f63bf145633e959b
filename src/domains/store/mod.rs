//! Store domain module.
//!
//! This module mediates all access to the backing document store. Tools never
//! talk to the driver directly; they receive a [`DocumentStore`] handle from
//! the [`StoreGateway`], which connects lazily and memoizes the session for
//! the lifetime of the process.
//!
//! ## Architecture
//!
//! - `gateway.rs` - Lazy, memoized connection management
//! - `mongo.rs` - MongoDB implementation of the store traits
//! - `document.rs` - BSON to JSON conversion for tool output
//! - `error.rs` - Store-specific error types

mod document;
mod error;
mod gateway;
mod mongo;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use mongodb::bson::Document;

pub use document::{document_to_json, documents_to_json};
pub use error::{StoreError, StoreResult};
pub use gateway::{StoreConnector, StoreGateway};
pub use mongo::{MongoConnector, MongoStore};

/// Direction of a sort on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Numeric form used in MongoDB sort documents.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// A single-field sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort by `field` in descending order.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Render as a sort document (`{ field: 1 | -1 }`).
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(self.field.clone(), self.direction.as_i32());
        doc
    }
}

/// Read-only query interface over a selected database.
///
/// Filters are passed through to the store verbatim; callers are
/// responsible for supplying predicates in the store's query dialect.
/// Limits are expected to be clamped by the caller.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Names of all collections in the selected database.
    async fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Documents matching `filter`, capped at `limit`, in store order.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<Document>>;

    /// Documents matching `filter`, ordered by `sort`, capped at `limit`.
    async fn find_sorted(
        &self,
        collection: &str,
        filter: Document,
        sort: SortSpec,
        limit: i64,
    ) -> StoreResult<Vec<Document>>;

    /// Number of documents matching `filter`.
    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_document() {
        let sort = SortSpec::descending("datestamp");
        assert_eq!(sort.to_document(), mongodb::bson::doc! { "datestamp": -1 });
    }

    #[test]
    fn test_sort_direction_values() {
        assert_eq!(SortDirection::Ascending.as_i32(), 1);
        assert_eq!(SortDirection::Descending.as_i32(), -1);
    }
}
