//! Postal address embedded in users and companies.

use serde::{Deserialize, Serialize};

use crate::faker::{RandomSource, address};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Draws every field from `rng` in declaration order.
    pub fn fake(rng: &mut RandomSource) -> Self {
        Self {
            street: address::street_address(rng),
            city: address::city(rng),
            state: address::state(rng),
            postal_code: address::zip_code(rng),
            country: address::country(rng),
        }
    }
}
