//! Port for the keyed document store backing every record collection.
//!
//! The portal persists each entity collection as one JSON array under a
//! stable key. Adapters only move opaque JSON text; decoding and fallback
//! seeding happen in the typed layer above ([`crate::domain::RecordStore`]).

use std::fmt;

use async_trait::async_trait;

use super::define_port_error;

/// Stable identifier for one persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Users,
    Tutorials,
    Tickets,
    Enquiries,
    Notifications,
}

impl CollectionKey {
    /// Storage key used by adapters. These names are part of the on-disk
    /// format and must not change.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Tutorials => "tutorials",
            Self::Tickets => "tickets",
            Self::Enquiries => "expressions_of_interest",
            Self::Notifications => "notifications",
        }
    }

    /// Every key, in seeding order.
    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::Users,
            Self::Tutorials,
            Self::Tickets,
            Self::Enquiries,
            Self::Notifications,
        ]
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

define_port_error! {
    /// Errors raised by collection store adapters.
    pub enum CollectionStoreError {
        /// The backing medium could not be read.
        Read { key: String, message: String } =>
            "failed to read collection '{key}': {message}",
        /// The backing medium could not be written.
        Write { key: String, message: String } =>
            "failed to write collection '{key}': {message}",
    }
}

/// Port for raw collection persistence.
///
/// Implementations store one JSON document per [`CollectionKey`] and treat
/// its contents as opaque text. A missing collection is reported as
/// `Ok(None)`, never as an error; the typed layer seeds it on first access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Fetch the raw JSON document stored under `key`.
    async fn read(&self, key: CollectionKey) -> Result<Option<String>, CollectionStoreError>;

    /// Replace the document stored under `key`.
    ///
    /// The write must be atomic with respect to concurrent readers: a
    /// reader observes either the previous document or the new one, never
    /// a partial write.
    async fn write(&self, key: CollectionKey, json: &str) -> Result<(), CollectionStoreError>;
}
