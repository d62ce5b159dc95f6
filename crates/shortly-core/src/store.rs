use crate::error::StorageError;
use crate::record::LinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a link store.
///
/// This trait provides only the read operations from [`LinkStore`],
/// allowing services like the redirector to have read-only access.
#[async_trait]
pub trait ReadLinkStore: Send + Sync + 'static {
    /// Retrieves the record stored under `id`.
    /// Returns `None` if nothing is stored under that key.
    async fn get(&self, id: &ShortCode) -> Result<Option<LinkRecord>>;

    /// Finds a record whose `original_url` equals `original_url`.
    ///
    /// Backends without an index by URL may scan every record; the first
    /// match wins.
    async fn exists_by_url(&self, original_url: &str) -> Result<Option<LinkRecord>>;
}

#[async_trait]
pub trait LinkStore: ReadLinkStore {
    /// Stores `record` under `id`, replacing whatever was there.
    ///
    /// The store does not deduplicate by URL; that is left to callers.
    async fn set(&self, id: &ShortCode, record: LinkRecord) -> Result<()>;
}
