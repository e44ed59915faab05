//! Fake user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Address;
use crate::faker::{RandomSource, date, person};

/// Youngest generated age in years.
pub const MIN_AGE_YEARS: u32 = 18;

/// Oldest generated age in years.
pub const MAX_AGE_YEARS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: DateTime<Utc>,
    pub address: Address,
}

impl User {
    /// Generates a user whose age at `reference` is between
    /// [`MIN_AGE_YEARS`] and [`MAX_AGE_YEARS`].
    ///
    /// The e-mail address is derived from the drawn names.
    pub fn fake(rng: &mut RandomSource, reference: DateTime<Utc>) -> Self {
        let id = rng.uuid();
        let first_name = person::first_name(rng);
        let last_name = person::last_name(rng);
        let email = person::email(rng, &first_name, &last_name);
        let phone = person::phone_number(rng);
        let birth_date = date::past_between(rng, reference, MIN_AGE_YEARS, MAX_AGE_YEARS);
        let address = Address::fake(rng);

        Self {
            id,
            first_name,
            last_name,
            email,
            phone,
            birth_date,
            address,
        }
    }
}
