//! Outbound ports: contracts the domain expects its adapters to satisfy.

mod collection_store;
mod macros;

pub use collection_store::{CollectionKey, CollectionStore, CollectionStoreError};
#[cfg(test)]
pub use collection_store::MockCollectionStore;

pub(crate) use macros::define_port_error;
