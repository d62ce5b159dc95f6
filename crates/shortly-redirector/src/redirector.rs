use crate::Result;
use async_trait::async_trait;
use shortly_core::{LinkRecord, ShortCode};

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its stored link record.
    /// Returns `Err(NotFound)` if nothing is stored under the code.
    async fn resolve(&self, id: &ShortCode) -> Result<LinkRecord>;
}
