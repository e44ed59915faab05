//! Fake product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::faker::{RandomSource, commerce};

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    /// EAN-13 code.
    pub sku: String,
    pub name: String,
    pub category: String,
    /// Always carries two decimal places, kept on the wire (`12.30`, not `12.3`).
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub description: String,
    pub color: String,
}

impl Product {
    pub fn fake(rng: &mut RandomSource) -> Self {
        Self {
            id: rng.uuid(),
            sku: commerce::ean13(rng),
            name: commerce::product_name(rng),
            category: commerce::category(rng),
            price: commerce::amount(rng, MIN_PRICE, MAX_PRICE),
            description: commerce::product_description(rng),
            color: commerce::color(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(price: Decimal) -> Product {
        Product {
            id: Uuid::nil(),
            sku: "4006381333931".to_string(),
            name: "Chair".to_string(),
            category: "Home".to_string(),
            price,
            description: "A chair".to_string(),
            color: "red".to_string(),
        }
    }

    #[test]
    fn test_price_keeps_trailing_zeros() {
        let json = serde_json::to_string(&sample(Decimal::new(1230, 2))).unwrap();
        assert!(json.contains(r#""price":12.30"#), "{json}");

        let json = serde_json::to_string(&sample(Decimal::new(500, 2))).unwrap();
        assert!(json.contains(r#""price":5.00"#), "{json}");
    }

    #[test]
    fn test_price_is_a_json_number() {
        let value = serde_json::to_value(sample(Decimal::new(99_999, 2))).unwrap();
        assert_eq!(value["price"].as_f64(), Some(999.99));
    }

    #[test]
    fn test_price_round_trips_with_scale() {
        let product = sample(Decimal::new(1000, 2));
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(back.price.scale(), 2);
        assert_eq!(back, product);
    }
}
