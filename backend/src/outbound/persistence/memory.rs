//! In-memory collection store for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{CollectionKey, CollectionStore, CollectionStoreError};

/// Collection store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<CollectionKey, String>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionStore for InMemoryStore {
    async fn read(&self, key: CollectionKey) -> Result<Option<String>, CollectionStoreError> {
        let collections = self
            .collections
            .lock()
            .map_err(|err| CollectionStoreError::read(key.as_str(), err.to_string()))?;
        Ok(collections.get(&key).cloned())
    }

    async fn write(&self, key: CollectionKey, json: &str) -> Result<(), CollectionStoreError> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|err| CollectionStoreError::write(key.as_str(), err.to_string()))?;
        collections.insert(key, json.to_owned());
        Ok(())
    }
}
