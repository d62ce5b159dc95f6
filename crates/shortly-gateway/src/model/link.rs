use serde::{Deserialize, Serialize};
use shortly_core::LinkRecord;

/// Body of `POST /api/v1/shorten`.
///
/// A missing `original_url` is read as the empty string.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub original_url: String,
}

/// A link record as returned to clients. Empty fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResponse {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub original_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub short_url: String,
}

impl From<LinkRecord> for LinkResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            id: record.id.to_string(),
            original_url: record.original_url,
            short_url: record.short_url,
        }
    }
}
