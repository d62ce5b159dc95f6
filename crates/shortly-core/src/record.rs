use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// A stored link: the identifier, the URL it points at and the short URL
/// handed back to the client.
///
/// Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The generated identifier, also the store key.
    pub id: ShortCode,
    /// The URL that was shortened.
    pub original_url: String,
    /// `scheme://host/id`, derived when the record was created.
    pub short_url: String,
}

impl LinkRecord {
    pub fn new(
        id: ShortCode,
        original_url: impl Into<String>,
        short_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            original_url: original_url.into(),
            short_url: short_url.into(),
        }
    }
}
