//! Typed access to the keyed collection store.
//!
//! [`RecordStore`] wraps the raw [`CollectionStore`] port with JSON
//! decoding and fallback seeding: a missing or corrupt collection is
//! replaced with its seed data and the seed is returned to the caller, so
//! reads never fail on absent state.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::Error;
use super::ports::{CollectionKey, CollectionStore, CollectionStoreError};
use super::DomainResult;

/// Typed collection reader/writer shared by every record service.
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn CollectionStore>,
}

impl RecordStore {
    #[must_use]
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    /// Load the collection stored under `key`, seeding it when missing.
    ///
    /// A document that fails to decode is treated the same as a missing
    /// one: the seed is written back and returned. This keeps a damaged
    /// store usable rather than wedging every request behind a decode
    /// error.
    pub async fn load_or_seed<T>(
        &self,
        key: CollectionKey,
        seed: impl FnOnce() -> Vec<T>,
    ) -> DomainResult<Vec<T>>
    where
        T: DeserializeOwned + Serialize,
    {
        match self.store.read(key).await.map_err(store_error)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(records) => Ok(records),
                Err(err) => {
                    warn!(collection = %key, error = %err, "corrupt collection, reseeding");
                    let records = seed();
                    self.save(key, &records).await?;
                    Ok(records)
                }
            },
            None => {
                let records = seed();
                self.save(key, &records).await?;
                Ok(records)
            }
        }
    }

    /// Replace the collection stored under `key`.
    pub async fn save<T>(&self, key: CollectionKey, records: &[T]) -> DomainResult<()>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(records)
            .map_err(|err| Error::internal(format!("failed to encode '{key}': {err}")))?;
        self.store.write(key, &json).await.map_err(store_error)
    }
}

fn store_error(err: CollectionStoreError) -> Error {
    Error::service_unavailable(err.to_string())
}

#[cfg(test)]
mod tests {
    use mockall::predicate::{always, eq};
    use serde::Deserialize;

    use super::*;
    use crate::domain::ports::MockCollectionStore;
    use crate::domain::ErrorCode;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
    }

    fn row(id: &str) -> Row {
        Row { id: id.into() }
    }

    #[tokio::test]
    async fn load_decodes_an_existing_collection() {
        let mut store = MockCollectionStore::new();
        store
            .expect_read()
            .with(eq(CollectionKey::Tutorials))
            .return_once(|_| Ok(Some(r#"[{"id":"a"},{"id":"b"}]"#.into())));
        let records = RecordStore::new(Arc::new(store));

        let rows: Vec<Row> = records
            .load_or_seed(CollectionKey::Tutorials, || vec![row("seed")])
            .await
            .expect("load should succeed");
        assert_eq!(rows, vec![row("a"), row("b")]);
    }

    #[tokio::test]
    async fn missing_collection_is_seeded_and_returned() {
        let mut store = MockCollectionStore::new();
        store
            .expect_read()
            .with(eq(CollectionKey::Users))
            .return_once(|_| Ok(None));
        store
            .expect_write()
            .with(eq(CollectionKey::Users), eq(r#"[{"id":"seed"}]"#))
            .return_once(|_, _| Ok(()));
        let records = RecordStore::new(Arc::new(store));

        let rows: Vec<Row> = records
            .load_or_seed(CollectionKey::Users, || vec![row("seed")])
            .await
            .expect("seeding load should succeed");
        assert_eq!(rows, vec![row("seed")]);
    }

    #[tokio::test]
    async fn corrupt_collection_is_reseeded() {
        let mut store = MockCollectionStore::new();
        store
            .expect_read()
            .with(eq(CollectionKey::Tickets))
            .return_once(|_| Ok(Some("not json".into())));
        store
            .expect_write()
            .with(eq(CollectionKey::Tickets), always())
            .return_once(|_, _| Ok(()));
        let records = RecordStore::new(Arc::new(store));

        let rows: Vec<Row> = records
            .load_or_seed(CollectionKey::Tickets, || vec![row("seed")])
            .await
            .expect("reseeding load should succeed");
        assert_eq!(rows, vec![row("seed")]);
    }

    #[tokio::test]
    async fn read_failures_surface_as_service_unavailable() {
        let mut store = MockCollectionStore::new();
        store
            .expect_read()
            .return_once(|_| Err(CollectionStoreError::read("users", "disk gone")));
        let records = RecordStore::new(Arc::new(store));

        let err = records
            .load_or_seed::<Row>(CollectionKey::Users, Vec::new)
            .await
            .expect_err("read failure should propagate");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
