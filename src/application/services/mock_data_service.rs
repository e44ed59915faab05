//! Fake data generation service.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Company, Product, User};
use crate::faker::RandomSource;

/// Smallest number of records returned by a batch request.
pub const MIN_COUNT: i64 = 1;

/// Largest number of records returned by a batch request.
pub const MAX_COUNT: i64 = 1000;

/// Default batch size when the caller does not specify one.
pub const DEFAULT_COUNT: i64 = 10;

/// Clamps a requested record count to `[MIN_COUNT, MAX_COUNT]`.
///
/// Out-of-range counts are saturated rather than rejected.
pub fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT) as usize
}

/// Service generating batches of fake records.
///
/// Each call builds its own [`RandomSource`] from the optional seed, so the
/// same `(count, seed)` always yields the same records and concurrent calls
/// never share random state. Without a seed the output is random.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataService;

impl MockDataService {
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` users (clamped to `1..=1000`).
    ///
    /// Birth dates are relative to the current time; see [`Self::get_users_at`]
    /// for a fixed reference instant.
    pub fn get_users(&self, count: i64, seed: Option<i64>) -> Vec<User> {
        self.get_users_at(count, seed, Utc::now())
    }

    /// Generates `count` users with birth dates relative to `reference`.
    ///
    /// With a seed and a fixed `reference` the output is fully reproducible.
    pub fn get_users_at(
        &self,
        count: i64,
        seed: Option<i64>,
        reference: DateTime<Utc>,
    ) -> Vec<User> {
        let count = clamp_count(count);
        let mut rng = RandomSource::from_seed(seed);

        (0..count).map(|_| User::fake(&mut rng, reference)).collect()
    }

    /// Generates `count` products (clamped to `1..=1000`).
    pub fn get_products(&self, count: i64, seed: Option<i64>) -> Vec<Product> {
        let count = clamp_count(count);
        let mut rng = RandomSource::from_seed(seed);

        (0..count).map(|_| Product::fake(&mut rng)).collect()
    }

    /// Generates a single company.
    pub fn get_company(&self, seed: Option<i64>) -> Company {
        let mut rng = RandomSource::from_seed(seed);
        Company::fake(&mut rng)
    }
}
