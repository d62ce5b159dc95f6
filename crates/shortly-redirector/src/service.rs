use crate::error::RedirectorError;
use crate::redirector::Redirector;
use async_trait::async_trait;
use shortly_core::{LinkRecord, ReadLinkStore, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Uses a read-only store to fetch link records; a missing record becomes
/// [`RedirectorError::NotFound`].
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    store: Arc<R>,
}

impl<R: ReadLinkStore> RedirectorService<R> {
    /// Creates a new RedirectorService with the given store.
    pub fn new(store: R) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl<R: ReadLinkStore> Redirector for RedirectorService<R> {
    async fn resolve(&self, id: &ShortCode) -> crate::Result<LinkRecord> {
        trace!(id = %id, "resolving short code");

        match self.store.get(id).await? {
            Some(record) => {
                debug!(id = %id, url = %record.original_url, "resolved short code");
                Ok(record)
            }
            None => {
                trace!(id = %id, "short code not found");
                Err(RedirectorError::NotFound(id.to_string()))
            }
        }
    }
}
