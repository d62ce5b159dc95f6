use async_trait::async_trait;
use parking_lot::RwLock;
use shortly_core::store::Result;
use shortly_core::{LinkRecord, LinkStore, ReadLinkStore, ShortCode};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// In-memory implementation of the link store traits.
///
/// The map sits behind a single reader/writer lock: lookups share the lock,
/// `set` holds it exclusively, and records are cloned in and out so a reader
/// never observes a half-written entry. Clones share the same map.
///
/// There is no index by URL, so [`ReadLinkStore::exists_by_url`] walks every
/// record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinkStore {
    storage: Arc<RwLock<HashMap<String, LinkRecord>>>,
}

impl InMemoryLinkStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::with_capacity(capacity))),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.read().is_empty()
    }
}

#[async_trait]
impl ReadLinkStore for InMemoryLinkStore {
    async fn get(&self, id: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self.storage.read().get(id.as_str()).cloned())
    }

    async fn exists_by_url(&self, original_url: &str) -> Result<Option<LinkRecord>> {
        let storage = self.storage.read();
        Ok(storage
            .values()
            .find(|record| record.original_url == original_url)
            .cloned())
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn set(&self, id: &ShortCode, record: LinkRecord) -> Result<()> {
        let key = id.as_str().to_owned();
        let replaced = self.storage.write().insert(key, record);
        if replaced.is_some() {
            trace!(id = %id, "overwrote existing record");
        }
        Ok(())
    }
}
