//! Seedable random source shared by all field synthesizers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Pseudo-random source handed to every generator call.
///
/// A source is created per request: either from an explicit seed, which makes
/// every value drawn from it reproducible, or from OS entropy. Nothing is
/// shared between sources, so concurrently seeded requests cannot observe each
/// other's state.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a deterministic source for `seed`.
    pub fn seeded(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    /// Creates a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Applies an optional seed: `Some` gives a reproducible source, `None`
    /// an entropy-seeded one.
    pub fn from_seed(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Picks one element of a non-empty list.
    pub fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.rng.random_range(0..items.len())]
    }

    /// Uniform integer in `low..=high`.
    pub fn between(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }

    /// Returns `true` with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    pub fn digit(&mut self) -> u8 {
        self.rng.random_range(0..=9)
    }

    /// Replaces every `#` in `pattern` with a random digit.
    pub fn replace_digits(&mut self, pattern: &str) -> String {
        pattern
            .chars()
            .map(|c| match c {
                '#' => char::from(b'0' + self.digit()),
                other => other,
            })
            .collect()
    }

    /// Random version-4 UUID built from 16 bytes of this source.
    pub fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}
