//! Fake company record.

use serde::{Deserialize, Serialize};

use super::Address;
use crate::faker::{RandomSource, company, person};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
    pub phone: String,
    pub address: Address,
}

impl Company {
    pub fn fake(rng: &mut RandomSource) -> Self {
        Self {
            name: company::company_name(rng),
            catch_phrase: company::catch_phrase(rng),
            bs: company::bs(rng),
            phone: person::phone_number(rng),
            address: Address::fake(rng),
        }
    }
}
