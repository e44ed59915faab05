//! Person-related values: names, e-mail, phone.

use super::RandomSource;
use super::locales::en;

pub fn first_name(rng: &mut RandomSource) -> String {
    rng.pick(en::FIRST_NAMES).to_string()
}

pub fn last_name(rng: &mut RandomSource) -> String {
    rng.pick(en::LAST_NAMES).to_string()
}

/// Builds an e-mail address from already drawn names.
///
/// Format: `first.last[NN]@domain` (or `first_last`), lower-cased, with
/// everything except ASCII letters and digits stripped from the name parts.
pub fn email(rng: &mut RandomSource, first_name: &str, last_name: &str) -> String {
    let first = sanitize(first_name);
    let last = sanitize(last_name);

    let separator = if rng.chance(0.5) { "." } else { "_" };
    let suffix = if rng.chance(0.5) {
        rng.between(0, 99).to_string()
    } else {
        String::new()
    };
    let domain = rng.pick(en::FREE_EMAIL_DOMAINS);

    format!("{first}{separator}{last}{suffix}@{domain}")
}

pub fn phone_number(rng: &mut RandomSource) -> String {
    let format = rng.pick(en::PHONE_FORMATS);
    rng.replace_digits(format)
}

fn sanitize(part: &str) -> String {
    part.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_derived_from_names() {
        let mut rng = RandomSource::seeded(5);
        let email = email(&mut rng, "Mary-Ann", "O'Brien");

        let (local, domain) = email.split_once('@').unwrap();
        assert!(local.starts_with("maryann"));
        assert!(local.contains("obrien"));
        assert!(en::FREE_EMAIL_DOMAINS.contains(&domain));
    }

    #[test]
    fn test_email_is_lowercase_ascii() {
        let mut rng = RandomSource::seeded(9);
        for _ in 0..50 {
            let first = first_name(&mut rng);
            let last = last_name(&mut rng);
            let email = email(&mut rng, &first, &last);
            assert!(email.is_ascii());
            assert_eq!(email, email.to_lowercase());
        }
    }

    #[test]
    fn test_phone_number_has_digits() {
        let mut rng = RandomSource::seeded(1);
        let phone = phone_number(&mut rng);
        assert!(phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10);
        assert!(!phone.contains('#'));
    }
}
