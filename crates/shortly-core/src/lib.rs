//! Core types and traits for the Shortly URL shortener.
//!
//! This crate provides the shared vocabulary used by the generator, the
//! storage backends and the shortening/resolution services.

pub mod clock;
pub mod error;
pub mod generator;
pub mod record;
pub mod shortcode;
pub mod shortener;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use error::{CoreError, EncodingError, ShortenerError, StorageError};
pub use generator::Generator;
pub use record::LinkRecord;
pub use shortcode::ShortCode;
pub use shortener::{ShortenParams, Shortener};
pub use store::{LinkStore, ReadLinkStore};
