//! Resolution service: turns a short code back into its link record.
//!
//! # Example
//!
//! ```rust
//! use shortly_core::{LinkRecord, LinkStore, ShortCode};
//! use shortly_redirector::{Redirector, RedirectorService};
//! use shortly_storage::InMemoryLinkStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryLinkStore::new();
//! let id = ShortCode::new("123456")?;
//! store
//!     .set(&id, LinkRecord::new(id.clone(), "http://google.com", "http://short.ly/123456"))
//!     .await?;
//!
//! let service = RedirectorService::new(store);
//! let record = service.resolve(&id).await?;
//! assert_eq!(record.original_url, "http://google.com");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod service;

pub use error::RedirectorError;
pub use redirector::Redirector;
pub use service::RedirectorService;

pub type Result<T> = std::result::Result<T, RedirectorError>;
