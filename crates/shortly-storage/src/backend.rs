use std::fmt::{Display, Formatter};

/// Which link store implementation to run with.
///
/// Only the in-memory backend exists today; the selector is kept so that
/// configuration stays stable as backends are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    InMemory,
}

/// Outcome of resolving a configured backend name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub backend: StorageBackend,
    /// Set when the requested name was not recognised and the default was
    /// used instead. Holds the original name.
    pub fallback_from: Option<String>,
}

impl StorageBackend {
    /// Resolves a backend from its configured name.
    ///
    /// Unknown names fall back to [`StorageBackend::InMemory`] rather than
    /// failing; the returned [`Selection`] records that so callers can warn.
    pub fn select(name: &str) -> Selection {
        match name.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Selection {
                backend: StorageBackend::InMemory,
                fallback_from: None,
            },
            _ => Selection {
                backend: StorageBackend::default(),
                fallback_from: Some(name.to_string()),
            },
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::InMemory => write!(f, "memory"),
        }
    }
}
