use std::sync::Arc;

use eventdesk_core::config::ServerConfig;
use eventdesk_core::store::{EventStore, MemoryStore, MongoStore};
use eventdesk_core::EventResult;
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        AppState { store }
    }

    /// Pick the store the configuration asks for. Connecting to MongoDB
    /// fails here if the deployment is unreachable.
    pub async fn from_config(config: &ServerConfig) -> EventResult<Self> {
        let store: Arc<dyn EventStore> = match &config.mongodb_uri {
            Some(uri) => Arc::new(
                MongoStore::connect(uri, &config.mongodb_database, &config.mongodb_collection)
                    .await?,
            ),
            None => {
                warn!("MONGODB_URI not set, events are kept in memory and lost on exit");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(AppState::new(store))
    }

    pub fn store(&self) -> &dyn EventStore {
        self.store.as_ref()
    }
}
