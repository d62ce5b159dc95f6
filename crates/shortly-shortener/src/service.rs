use async_trait::async_trait;
use shortly_core::{
    Clock, Generator, LinkRecord, LinkStore, ShortenParams, Shortener, ShortenerError, SystemClock,
};
use std::sync::Arc;
use tracing::{debug, info};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `LinkStore`, a `Generator` and a `Clock` to handle:
/// - Reuse of the existing record for an already shortened URL
/// - Identifier generation, salted with the original URL
/// - Short URL construction from the request scheme and host
///
/// The existence check and the write are separate store calls. Two
/// concurrent first requests for the same URL can both miss the check and
/// store two records; the store keeps both and later requests reuse
/// whichever one the URL scan reaches first. No collision retry is
/// performed either: a generated id that is already taken overwrites the
/// older record.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G, C = SystemClock> {
    store: Arc<S>,
    generator: Arc<G>,
    clock: C,
}

impl<S: LinkStore, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` driven by the system clock.
    pub fn new(store: S, generator: G) -> Self {
        Self::with_clock(store, generator, SystemClock)
    }
}

impl<S: LinkStore, G: Generator, C: Clock> ShortenerService<S, G, C> {
    /// Creates a new `ShortenerService` reading time from `clock`.
    pub fn with_clock(store: S, generator: G, clock: C) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            clock,
        }
    }
}

#[async_trait]
impl<S: LinkStore, G: Generator, C: Clock> Shortener for ShortenerService<S, G, C> {
    async fn create_short_url(&self, params: ShortenParams) -> Result<LinkRecord, ShortenerError> {
        if let Some(existing) = self.store.exists_by_url(&params.original_url).await? {
            debug!(
                id = %existing.id,
                original_url = %existing.original_url,
                "short url already exists"
            );
            return Ok(existing);
        }

        let id = self
            .generator
            .generate(&params.original_url, self.clock.now())?;
        let short_url = id.to_url(&params.scheme, &params.host);
        let record = LinkRecord::new(id.clone(), params.original_url, short_url);

        self.store.set(&id, record.clone()).await?;

        info!(
            id = %record.id,
            original_url = %record.original_url,
            short_url = %record.short_url,
            "created short url"
        );
        Ok(record)
    }
}
