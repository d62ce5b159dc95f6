use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The public identifier of a shortened link.
///
/// Short codes are used verbatim as the store key and as the path segment
/// of the short URL, so the only hard requirement is that they are not empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode`, rejecting the empty string.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CoreError::EmptyShortCode);
        }
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that never emit an empty code).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Builds the fully-qualified short URL, `scheme://host/code`.
    pub fn to_url(&self, scheme: &str, host: &str) -> String {
        format!("{}://{}/{}", scheme, host.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
