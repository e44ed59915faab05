//! Query parameters for the fake-data endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::mock_data_service::DEFAULT_COUNT;

/// `?count=&seed=` for batch endpoints.
///
/// Both values are parsed from their decimal string form; a value that is not
/// an integer is rejected by the extractor with 400.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BatchQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub count: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub seed: Option<i64>,
}

impl BatchQuery {
    /// Requested count, [`DEFAULT_COUNT`] when absent. Clamping happens in the service.
    pub fn count(&self) -> i64 {
        self.count.unwrap_or(DEFAULT_COUNT)
    }
}

/// `?seed=` for single-record endpoints.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct SeedQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub seed: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_query_defaults() {
        let query: BatchQuery = serde_json::from_str("{}").unwrap();

        assert_eq!(query.count(), DEFAULT_COUNT);
        assert_eq!(query.seed, None);
    }

    #[test]
    fn test_batch_query_parses_strings() {
        let query: BatchQuery =
            serde_json::from_str(r#"{"count": "25", "seed": "-42"}"#).unwrap();

        assert_eq!(query.count(), 25);
        assert_eq!(query.seed, Some(-42));
    }

    #[test]
    fn test_batch_query_rejects_non_numeric() {
        assert!(serde_json::from_str::<BatchQuery>(r#"{"count": "many"}"#).is_err());
    }
}
