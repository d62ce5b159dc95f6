//! Identifier generators for Shortly.
//!
//! [`SaltedHasher`] derives a short code from a salt and an instant using a
//! hashids-compatible encoding, so the same pair always maps to the same code.

pub mod salted;

pub use salted::{HasherSettings, SaltedHasher, DEFAULT_ALPHABET};
pub use shortly_core::Generator;
