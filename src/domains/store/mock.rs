//! In-memory store doubles for tests.
//!
//! `MockStore` understands just enough of the query dialect for the tools:
//! empty filters, equality, `$or`, and case-insensitive `$regex` treated as a
//! substring match.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use super::{
    DocumentStore, SortDirection, SortSpec, StoreConnector, StoreError, StoreResult,
};

/// A query the mock received.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ListCollections,
    Find {
        collection: String,
        filter: Document,
        limit: i64,
    },
    FindSorted {
        collection: String,
        filter: Document,
        sort: SortSpec,
        limit: i64,
    },
    Count {
        collection: String,
        filter: Document,
    },
}

#[derive(Default)]
pub struct MockStore {
    collections: BTreeMap<String, Vec<Document>>,
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, name: &str, docs: Vec<Document>) -> Self {
        self.collections.insert(name.to_string(), docs);
        self
    }

    /// Make every query fail with `message`.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> StoreResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(StoreError::query(message.clone())),
            None => Ok(()),
        }
    }

    fn matching(&self, collection: &str, filter: &Document) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches_filter(doc, filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.record(RecordedCall::ListCollections)?;
        Ok(self.collections.keys().cloned().collect())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        self.record(RecordedCall::Find {
            collection: collection.to_string(),
            filter: filter.clone(),
            limit,
        })?;
        let mut docs = self.matching(collection, &filter);
        docs.truncate(limit as usize);
        Ok(docs)
    }

    async fn find_sorted(
        &self,
        collection: &str,
        filter: Document,
        sort: SortSpec,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        self.record(RecordedCall::FindSorted {
            collection: collection.to_string(),
            filter: filter.clone(),
            sort: sort.clone(),
            limit,
        })?;
        let mut docs = self.matching(collection, &filter);
        docs.sort_by_key(|doc| sort_key(doc.get(&sort.field)));
        if sort.direction == SortDirection::Descending {
            docs.reverse();
        }
        docs.truncate(limit as usize);
        Ok(docs)
    }

    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        self.record(RecordedCall::Count {
            collection: collection.to_string(),
            filter: filter.clone(),
        })?;
        Ok(self.matching(collection, &filter).len() as u64)
    }
}

fn sort_key(value: Option<&Bson>) -> i64 {
    match value {
        Some(Bson::DateTime(dt)) => dt.timestamp_millis(),
        Some(Bson::Int32(n)) => i64::from(*n),
        Some(Bson::Int64(n)) => *n,
        _ => i64::MIN,
    }
}

fn matches_filter(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| {
        if key == "$or" {
            return match expected {
                Bson::Array(branches) => branches.iter().any(|branch| match branch {
                    Bson::Document(sub) => matches_filter(doc, sub),
                    _ => false,
                }),
                _ => false,
            };
        }
        match expected {
            Bson::Document(cond) if cond.contains_key("$regex") => {
                let pattern = cond.get_str("$regex").unwrap_or_default().to_lowercase();
                doc.get_str(key)
                    .map(|s| s.to_lowercase().contains(&pattern))
                    .unwrap_or(false)
            }
            other => doc.get(key) == Some(other),
        }
    })
}

/// Connector that hands out a shared mock and counts attempts.
pub struct CountingConnector {
    store: Arc<MockStore>,
    attempts: AtomicUsize,
    failures_left: AtomicUsize,
}

impl CountingConnector {
    pub fn new(store: MockStore) -> Self {
        Self::failing_first(store, 0)
    }

    /// Fail the first `failures` attempts with a connection error.
    pub fn failing_first(store: MockStore, failures: usize) -> Self {
        Self {
            store: Arc::new(store),
            attempts: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(failures),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> Arc<MockStore> {
        self.store.clone()
    }
}

#[async_trait]
impl StoreConnector for CountingConnector {
    async fn connect(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::SeqCst);
            return Err(StoreError::connection("connection refused"));
        }
        Ok(self.store.clone())
    }
}
