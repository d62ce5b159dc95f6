use crate::error::EncodingError;
use crate::shortcode::ShortCode;
use jiff::Timestamp;

/// Trait for deriving short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// No collision detection happens downstream, so a generator that repeats
/// itself will cause the later record to replace the earlier one.
pub trait Generator: Send + Sync + 'static {
    /// Derives an identifier from a seed (used as salt) and an instant.
    fn generate(&self, seed: &str, instant: Timestamp) -> Result<ShortCode, EncodingError>;
}
