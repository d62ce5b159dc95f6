use harsh::Harsh;
use jiff::Timestamp;
use shortly_core::{EncodingError, Generator, ShortCode};
use tracing::trace;
use typed_builder::TypedBuilder;

/// Alphabet used when none is configured: `a-z`, `A-Z`, then `1-9` and `0`.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

const MIN_ALPHABET_LENGTH: usize = 16;

/// Configures a [`SaltedHasher`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct HasherSettings {
    /// Characters identifiers are drawn from. Must hold at least 16 unique,
    /// non-whitespace ASCII characters.
    #[builder(default = DEFAULT_ALPHABET.to_string(), setter(into))]
    pub alphabet: String,
    /// Identifiers shorter than this are padded up to it.
    #[builder(default = 0)]
    pub min_length: usize,
}

impl Default for HasherSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A hashids generator keyed by a per-call salt.
///
/// The seed passed to [`Generator::generate`] is used as the salt and the
/// instant is encoded as whole seconds since the unix epoch. For a fixed salt
/// the encoding is a bijection, so different instants never collide. Different
/// salts permute the alphabet differently, so the same instant almost always
/// yields different identifiers, though nothing guarantees it. Only the first
/// 47 bytes of the salt take part in the permutation, so seeds sharing a
/// longer prefix encode the same instant identically.
#[derive(Debug, Clone)]
pub struct SaltedHasher {
    alphabet: String,
    min_length: usize,
}

impl SaltedHasher {
    pub fn new(settings: HasherSettings) -> Result<Self, EncodingError> {
        let mut seen: Vec<char> = Vec::with_capacity(settings.alphabet.len());
        for c in settings.alphabet.chars() {
            if c.is_whitespace() || !c.is_ascii() {
                return Err(EncodingError::InvalidAlphabet(format!(
                    "alphabet must hold printable ascii characters, got {:?}",
                    c
                )));
            }
            if seen.contains(&c) {
                return Err(EncodingError::InvalidAlphabet(format!(
                    "alphabet must contain unique characters, '{}' is repeated",
                    c
                )));
            }
            seen.push(c);
        }

        if seen.len() < MIN_ALPHABET_LENGTH {
            return Err(EncodingError::InvalidAlphabet(format!(
                "alphabet must contain at least {} unique characters, got {}",
                MIN_ALPHABET_LENGTH,
                seen.len()
            )));
        }

        let hasher = Self {
            alphabet: settings.alphabet,
            min_length: settings.min_length,
        };
        // reject anything else the encoder refuses at construction
        hasher.harsh("")?;
        Ok(hasher)
    }

    /// Encodes `number` using `salt`.
    pub fn encode(&self, salt: &str, number: u64) -> Result<String, EncodingError> {
        Ok(self.harsh(salt)?.encode(&[number]))
    }

    fn harsh(&self, salt: &str) -> Result<Harsh, EncodingError> {
        Harsh::builder()
            .salt(salt)
            .alphabet(self.alphabet.as_str())
            .length(self.min_length)
            .build()
            .map_err(|e| EncodingError::InvalidAlphabet(e.to_string()))
    }
}

impl Default for SaltedHasher {
    fn default() -> Self {
        Self::new(HasherSettings::default()).expect("default alphabet is valid")
    }
}

impl Generator for SaltedHasher {
    fn generate(&self, seed: &str, instant: Timestamp) -> Result<ShortCode, EncodingError> {
        let seconds = instant.as_second();
        if seconds < 0 {
            return Err(EncodingError::NegativeInstant(seconds));
        }

        let code = self.encode(seed, seconds as u64)?;
        trace!(seed = %seed, seconds, code = %code, "generated short code");
        Ok(ShortCode::new_unchecked(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn at(seconds: i64) -> Timestamp {
        Timestamp::from_second(seconds).unwrap()
    }

    #[test]
    fn matches_reference_vectors() {
        let hasher = SaltedHasher::default();
        assert_eq!(hasher.encode("this is my salt", 12345).unwrap(), "NkK9");
        assert_eq!(hasher.encode("this is my salt", 1).unwrap(), "NV");

        let padded = SaltedHasher::new(HasherSettings::builder().min_length(8).build()).unwrap();
        assert_eq!(padded.encode("this is my salt", 1).unwrap(), "gB0NV05e");
    }

    #[test]
    fn generate_encodes_unix_seconds() {
        let hasher = SaltedHasher::default();
        let code = hasher
            .generate("http://google.co.uk", at(1_700_000_000))
            .unwrap();
        assert_eq!(code.as_str(), "Gy0WVJ7");
    }

    #[test]
    fn generate_is_deterministic() {
        let hasher = SaltedHasher::default();
        let first = hasher.generate("http://google.com", at(1_700_000_000)).unwrap();
        let second = hasher.generate("http://google.com", at(1_700_000_000)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sub_second_precision_is_ignored() {
        let hasher = SaltedHasher::default();
        let whole = at(1_700_000_000);
        let later = Timestamp::new(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(
            hasher.generate("http://google.com", whole).unwrap(),
            hasher.generate("http://google.com", later).unwrap()
        );
    }

    #[test]
    fn different_salts_same_instant_differ() {
        let hasher = SaltedHasher::default();
        let mut rng = StdRng::seed_from_u64(0x5107_71);

        for _ in 0..256 {
            let instant = at(rng.gen_range(0..4_000_000_000));
            let a = format!("https://example.com/{}", rng.gen::<u64>());
            let b = format!("https://example.org/{}", rng.gen::<u64>());

            let code_a = hasher.generate(&a, instant).unwrap();
            let code_b = hasher.generate(&b, instant).unwrap();
            assert_ne!(code_a, code_b, "salts {a} and {b} collided at {instant}");
        }
    }

    #[test]
    fn only_leading_salt_bytes_matter() {
        let hasher = SaltedHasher::default();
        let prefix = format!("https://example.com/{}", "x".repeat(64));
        let instant = at(1_700_000_000);

        let a = hasher.generate(&format!("{prefix}/a"), instant).unwrap();
        let b = hasher.generate(&format!("{prefix}/b"), instant).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "65WOLbl");

        // differing within the leading bytes still separates them
        let c = hasher
            .generate(&format!("https://example.org/{}/a", "x".repeat(64)), instant)
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn same_salt_different_instants_differ() {
        let hasher = SaltedHasher::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..256 {
            let salt = format!("https://example.com/{}", rng.gen::<u32>());
            let first = rng.gen_range(0..4_000_000_000i64);
            let second = first + rng.gen_range(1..1_000_000i64);

            let code_a = hasher.generate(&salt, at(first)).unwrap();
            let code_b = hasher.generate(&salt, at(second)).unwrap();
            assert_ne!(code_a, code_b, "instants {first} and {second} collided");
        }
    }

    #[test]
    fn output_stays_within_alphabet() {
        let hasher = SaltedHasher::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..128 {
            let salt = format!("http://host-{}.test/path?q={}", rng.gen::<u16>(), rng.gen::<u32>());
            let code = hasher
                .generate(&salt, at(rng.gen_range(0..4_000_000_000)))
                .unwrap();
            assert!(!code.as_str().is_empty());
            assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn empty_salt_still_encodes() {
        let hasher = SaltedHasher::default();
        let code = hasher.generate("", at(1_700_000_000)).unwrap();
        assert!(!code.as_str().is_empty());
    }

    #[test]
    fn min_length_pads_output() {
        let hasher = SaltedHasher::new(HasherSettings::builder().min_length(12).build()).unwrap();
        for seconds in [0, 1, 99, 1_700_000_000] {
            let code = hasher.generate("http://google.com", at(seconds)).unwrap();
            assert_eq!(code.as_str().chars().count(), 12);
        }
    }

    #[test]
    fn instant_before_epoch_is_rejected() {
        let hasher = SaltedHasher::default();
        let err = hasher.generate("http://google.com", at(-1)).unwrap_err();
        assert_eq!(err, EncodingError::NegativeInstant(-1));
    }

    #[test]
    fn short_alphabet_is_rejected() {
        let settings = HasherSettings::builder().alphabet("abcdef").build();
        assert!(matches!(
            SaltedHasher::new(settings),
            Err(EncodingError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn whitespace_alphabet_is_rejected() {
        let settings = HasherSettings::builder()
            .alphabet("abcdefghijklmnop qrstuvwxyz")
            .build();
        assert!(matches!(
            SaltedHasher::new(settings),
            Err(EncodingError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn non_ascii_alphabet_is_rejected() {
        let settings = HasherSettings::builder()
            .alphabet("abcdefghijklmnopqrstuvwxyzé")
            .build();
        assert!(matches!(
            SaltedHasher::new(settings),
            Err(EncodingError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn repeated_characters_are_rejected() {
        let settings = HasherSettings::builder()
            .alphabet("aabcdefghijklmnopqrstuvwxyz")
            .build();
        assert!(matches!(
            SaltedHasher::new(settings),
            Err(EncodingError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn separator_heavy_alphabet_encodes() {
        // every separator plus two plain characters
        let settings = HasherSettings::builder()
            .alphabet("cfhistuCFHISTUab")
            .build();
        let hasher = SaltedHasher::new(settings).unwrap();
        let code = hasher.generate("http://google.com", at(1_700_000_000)).unwrap();
        assert!(code.as_str().chars().all(|c| "cfhistuCFHISTUab".contains(c)));
    }

    #[test]
    fn hasher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SaltedHasher>();
    }
}
