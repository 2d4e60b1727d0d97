//! Todo id generation
//!
//! Ids must never repeat within one session. Neither generator is
//! cryptographically strong, and the store re-draws when a candidate was
//! already issued.

use super::item::TodoId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Characters used by generated tokens (lowercase base 36)
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Token length of the random generator unless configured otherwise
pub const DEFAULT_ID_LENGTH: usize = 9;

/// Accepted token lengths for [`RandomIdGenerator`]
pub const ID_LENGTH_RANGE: RangeInclusive<usize> = 4..=32;

/// Length of the per-session nonce used by [`SequentialIdGenerator`]
const NONCE_LENGTH: usize = 4;

/// Produces candidate ids for new todo items
pub trait IdGenerator: Send {
    /// Produce the next candidate id
    fn generate(&mut self) -> TodoId;
}

fn random_token(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Random fixed-length alphanumeric tokens such as `k3x9a0q1z`
pub struct RandomIdGenerator {
    rng: StdRng,
    len: usize,
}

impl RandomIdGenerator {
    /// Create a generator seeded from OS entropy
    ///
    /// # Arguments
    /// * `len` - Number of characters per token, clamped to [`ID_LENGTH_RANGE`]
    pub fn new(len: usize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            len: clamp_length(len),
        }
    }

    /// Create a reproducible generator from a fixed seed
    pub fn seeded(len: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            len: clamp_length(len),
        }
    }
}

fn clamp_length(len: usize) -> usize {
    len.clamp(*ID_LENGTH_RANGE.start(), *ID_LENGTH_RANGE.end())
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> TodoId {
        TodoId::new(random_token(&mut self.rng, self.len))
    }
}

/// Counter-based ids prefixed with a session nonce, e.g. `q7c2-1`, `q7c2-2`
pub struct SequentialIdGenerator {
    nonce: String,
    counter: u64,
}

impl SequentialIdGenerator {
    /// Create a generator with a random session nonce
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        Self::with_nonce(random_token(&mut rng, NONCE_LENGTH))
    }

    /// Create a generator with a caller-chosen nonce
    pub fn with_nonce(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            counter: 0,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> TodoId {
        self.counter += 1;
        TodoId::new(format!("{}-{}", self.nonce, self.counter))
    }
}
