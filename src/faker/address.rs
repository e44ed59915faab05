//! Postal address values.

use super::RandomSource;
use super::locales::en;

/// `{building number} {street name}`, e.g. `4821 Harris Crossing`.
pub fn street_address(rng: &mut RandomSource) -> String {
    let number_format = match rng.between(0, 2) {
        0 => "###",
        1 => "####",
        _ => "#####",
    };
    let number = rng.replace_digits(number_format);
    let number = number.trim_start_matches('0');
    let number = if number.is_empty() { "1" } else { number };

    format!("{} {}", number, street_name(rng))
}

pub fn street_name(rng: &mut RandomSource) -> String {
    let name = if rng.chance(0.5) {
        rng.pick(en::FIRST_NAMES)
    } else {
        rng.pick(en::LAST_NAMES)
    };
    format!("{} {}", name, rng.pick(en::STREET_SUFFIXES))
}

pub fn city(rng: &mut RandomSource) -> String {
    match rng.between(0, 3) {
        0 => format!(
            "{} {}{}",
            rng.pick(en::CITY_PREFIXES),
            rng.pick(en::FIRST_NAMES),
            rng.pick(en::CITY_SUFFIXES)
        ),
        1 => format!("{} {}", rng.pick(en::CITY_PREFIXES), rng.pick(en::FIRST_NAMES)),
        2 => format!("{}{}", rng.pick(en::FIRST_NAMES), rng.pick(en::CITY_SUFFIXES)),
        _ => format!("{}{}", rng.pick(en::LAST_NAMES), rng.pick(en::CITY_SUFFIXES)),
    }
}

pub fn state(rng: &mut RandomSource) -> String {
    rng.pick(en::STATES).to_string()
}

pub fn zip_code(rng: &mut RandomSource) -> String {
    let format = rng.pick(en::POSTCODE_FORMATS);
    rng.replace_digits(format)
}

pub fn country(rng: &mut RandomSource) -> String {
    rng.pick(en::COUNTRIES).to_string()
}
