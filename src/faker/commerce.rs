//! Commerce values: SKUs, product names, categories, prices.

use rust_decimal::Decimal;

use super::RandomSource;
use super::locales::en;

/// A valid EAN-13 code: 12 random digits followed by the check digit.
pub fn ean13(rng: &mut RandomSource) -> String {
    let digits: Vec<u8> = (0..12).map(|_| rng.digit()).collect();
    let check = ean13_check_digit(&digits);

    digits
        .iter()
        .chain(std::iter::once(&check))
        .map(|d| char::from(b'0' + d))
        .collect()
}

/// Check digit over the first 12 digits: weights alternate 1, 3 from the left.
pub fn ean13_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// `{adjective} {material} {product}`, e.g. `Rustic Granite Chair`.
pub fn product_name(rng: &mut RandomSource) -> String {
    format!(
        "{} {} {}",
        rng.pick(en::PRODUCT_ADJECTIVES),
        rng.pick(en::PRODUCT_MATERIALS),
        rng.pick(en::PRODUCT_NAMES)
    )
}

pub fn category(rng: &mut RandomSource) -> String {
    rng.pick(en::DEPARTMENTS).to_string()
}

pub fn product_description(rng: &mut RandomSource) -> String {
    rng.pick(en::PRODUCT_DESCRIPTIONS).to_string()
}

pub fn color(rng: &mut RandomSource) -> String {
    rng.pick(en::COLORS).to_string()
}

/// Monetary amount in `[min, max]` with exactly two decimal places.
pub fn amount(rng: &mut RandomSource, min: i64, max: i64) -> Decimal {
    let cents = rng.between(min * 100, max * 100);
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_check_digit_known_value() {
        // 4006381333931 is a published EAN-13 example.
        let digits = [4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3];
        assert_eq!(ean13_check_digit(&digits), 1);
    }

    #[test]
    fn test_ean13_is_valid() {
        let mut rng = RandomSource::seeded(13);
        for _ in 0..50 {
            let code = ean13(&mut rng);
            assert_eq!(code.len(), 13);

            let digits: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
            assert_eq!(ean13_check_digit(&digits[..12]), digits[12]);
        }
    }

    #[test]
    fn test_amount_range_and_scale() {
        let mut rng = RandomSource::seeded(99);
        let min = Decimal::new(1, 0);
        let max = Decimal::new(999, 0);

        for _ in 0..500 {
            let price = amount(&mut rng, 1, 999);
            assert_eq!(price.scale(), 2);
            assert!(price >= min && price <= max);
        }
    }

    #[test]
    fn test_product_name_has_three_words() {
        let mut rng = RandomSource::seeded(4);
        let name = product_name(&mut rng);
        assert_eq!(name.split(' ').count(), 3);
    }
}
