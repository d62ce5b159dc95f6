//! URL shortening service.
//!
//! [`ShortenerService`] combines a [`LinkStore`](shortly_core::LinkStore) and a
//! [`Generator`](shortly_core::Generator) to implement create-or-reuse
//! semantics: the first request for a URL creates its record, later requests
//! get that record back.

pub mod service;

pub use service::ShortenerService;
pub use shortly_core::{ShortenParams, Shortener, ShortenerError};
