//! Link store backends for Shortly.

pub mod backend;
pub mod memory;

pub use backend::{Selection, StorageBackend};
pub use memory::InMemoryLinkStore;
pub use shortly_core::{LinkStore, ReadLinkStore, StorageError};
