//! Store gateway - lazy, memoized access to the document store.
//!
//! The gateway owns the single store handle of the process. The first call to
//! [`StoreGateway::connect`] runs the connector; later calls return the cached
//! handle. A failed attempt is not cached, so the next call tries again.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::{DocumentStore, StoreError, StoreResult};

/// Establishes a session with the backing store.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// Open a connection and select the target database.
    async fn connect(&self) -> StoreResult<Arc<dyn DocumentStore>>;
}

/// Owner of the process-wide store handle.
pub struct StoreGateway {
    connector: Arc<dyn StoreConnector>,
    handle: OnceCell<Arc<dyn DocumentStore>>,
}

impl StoreGateway {
    /// Create a gateway that will connect through `connector` on first use.
    pub fn new(connector: Arc<dyn StoreConnector>) -> Self {
        Self {
            connector,
            handle: OnceCell::new(),
        }
    }

    /// Return the store handle, connecting first if needed.
    pub async fn connect(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                info!("Connecting to document store");
                let store = self.connector.connect().await.inspect_err(|e| {
                    warn!("Store connection failed: {}", e);
                })?;
                info!("Document store connection ready");
                Ok::<_, StoreError>(store)
            })
            .await?;
        Ok(handle.clone())
    }

    /// Whether a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }
}
