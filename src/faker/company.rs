//! Company values.

use super::RandomSource;
use super::locales::en;

pub fn company_name(rng: &mut RandomSource) -> String {
    match rng.between(0, 2) {
        0 => format!(
            "{} {}",
            rng.pick(en::LAST_NAMES),
            rng.pick(en::COMPANY_SUFFIXES)
        ),
        1 => format!("{} - {}", rng.pick(en::LAST_NAMES), rng.pick(en::LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            rng.pick(en::LAST_NAMES),
            rng.pick(en::LAST_NAMES),
            rng.pick(en::LAST_NAMES)
        ),
    }
}

/// e.g. `Robust context-sensitive middleware`.
pub fn catch_phrase(rng: &mut RandomSource) -> String {
    format!(
        "{} {} {}",
        rng.pick(en::CATCH_PHRASE_ADJECTIVES),
        rng.pick(en::CATCH_PHRASE_DESCRIPTORS),
        rng.pick(en::CATCH_PHRASE_NOUNS)
    )
}

/// e.g. `synergize scalable e-markets`.
pub fn bs(rng: &mut RandomSource) -> String {
    format!(
        "{} {} {}",
        rng.pick(en::BS_VERBS),
        rng.pick(en::BS_ADJECTIVES),
        rng.pick(en::BS_NOUNS)
    )
}
