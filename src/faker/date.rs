//! Date values relative to a reference instant.

use chrono::{DateTime, Months, TimeDelta, Utc};

use super::RandomSource;

/// A random instant between `max_years` and `min_years` years before `reference`.
///
/// Precision is whole seconds. With `min_years = 18, max_years = 50` this yields
/// the birth date of someone aged 18 to 50 at `reference`.
pub fn past_between(
    rng: &mut RandomSource,
    reference: DateTime<Utc>,
    min_years: u32,
    max_years: u32,
) -> DateTime<Utc> {
    let latest = years_before(reference, min_years);
    let earliest = years_before(reference, max_years);

    let span = (latest - earliest).num_seconds().max(0);
    let offset = rng.between(0, span);

    earliest + TimeDelta::seconds(offset)
}

fn years_before(reference: DateTime<Utc>, years: u32) -> DateTime<Utc> {
    reference
        .checked_sub_months(Months::new(years * 12))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
