//! MongoDB implementation of the store traits.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Database};
use tracing::{debug, info, instrument};

use super::{DocumentStore, SortSpec, StoreConnector, StoreError, StoreResult};
use crate::core::config::DatabaseConfig;

/// Connector that opens a MongoDB client and verifies it with a ping.
pub struct MongoConnector {
    config: DatabaseConfig,
    app_name: String,
}

impl MongoConnector {
    /// Create a connector for the given database settings.
    pub fn new(config: DatabaseConfig, app_name: impl Into<String>) -> Self {
        Self {
            config,
            app_name: app_name.into(),
        }
    }

    /// Client options for the configured server, with credentials attached
    /// directly rather than embedded in the URI.
    pub async fn client_options(&self) -> StoreResult<ClientOptions> {
        let mut options = ClientOptions::parse(self.config.connection_uri())
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;
        options.app_name = Some(self.app_name.clone());
        options.credential = Some(
            Credential::builder()
                .username(self.config.username.clone())
                .password(self.config.password.clone())
                .build(),
        );
        if let Some(secs) = self.config.timeout_secs {
            options.server_selection_timeout = Some(Duration::from_secs(secs));
        }
        Ok(options)
    }
}

#[async_trait]
impl StoreConnector for MongoConnector {
    #[instrument(skip(self), fields(host = %self.config.host, port = self.config.port, db = %self.config.database))]
    async fn connect(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        let options = self.client_options().await?;
        let client =
            Client::with_options(options).map_err(|e| StoreError::connection(e.to_string()))?;
        let db = client.database(&self.config.database);

        // The driver connects lazily; force the handshake here so failures
        // surface from connect() rather than from the first query.
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        info!("Connected to MongoDB database: {}", self.config.database);
        Ok(Arc::new(MongoStore::new(db)))
    }
}

/// A [`DocumentStore`] backed by a MongoDB database handle.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Wrap an already selected database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let names = self.db.list_collection_names().await?;
        debug!("Found {} collections", names.len());
        Ok(names)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_sorted(
        &self,
        collection: &str,
        filter: Document,
        sort: SortSpec,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .sort(sort.to_document())
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        Ok(self
            .db
            .collection::<Document>(collection)
            .count_documents(filter)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_options_with_reserved_characters_in_password() {
        let config = DatabaseConfig {
            username: "lang:box".to_string(),
            password: "p@ss:w/rd".to_string(),
            timeout_secs: Some(3),
            ..DatabaseConfig::default()
        };
        let options = MongoConnector::new(config, "langbox-mongodb")
            .client_options()
            .await
            .unwrap();

        let credential = options.credential.as_ref().unwrap();
        assert_eq!(credential.username.as_deref(), Some("lang:box"));
        assert_eq!(credential.password.as_deref(), Some("p@ss:w/rd"));
        assert_eq!(options.app_name.as_deref(), Some("langbox-mongodb"));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_secs(3)));
    }
}
