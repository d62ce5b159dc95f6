use crate::error::ShortenerError;
use crate::record::LinkRecord;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenParams {
    /// The original URL to be shortened.
    pub original_url: String,
    /// Host (and optional port) the short URL is served from.
    pub host: String,
    /// Scheme of the short URL, e.g. `http`.
    pub scheme: String,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Returns the record for `params.original_url`, creating it on first use.
    ///
    /// Submitting the same URL again yields the record created the first time.
    async fn create_short_url(&self, params: ShortenParams) -> Result<LinkRecord>;
}
