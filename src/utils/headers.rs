//! Flattening of request headers.

use axum::http::HeaderMap;
use std::collections::BTreeMap;

/// Separator placed between the values of a repeated header.
///
/// A plain comma without padding, the same form a proxy produces when it
/// folds repeated field lines into one.
pub const VALUE_SEPARATOR: &str = ",";

/// Folds `headers` into one string per header name.
///
/// Repeated headers are joined with [`VALUE_SEPARATOR`] in the order they were
/// received. Values that are not valid UTF-8 are converted lossily. Names are
/// the lower-case wire names.
pub fn to_flat_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(VALUE_SEPARATOR);
        map.insert(name.as_str().to_string(), joined);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_empty_headers() {
        assert!(to_flat_map(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_single_value_with_commas_is_preserved() {
        let mut headers = HeaderMap::new();
        headers.insert("x-comma-value", HeaderValue::from_static("value,with,commas"));

        let map = to_flat_map(&headers);
        assert_eq!(map.len(), 1);
        assert_eq!(map["x-comma-value"], "value,with,commas");
    }

    #[test]
    fn test_repeated_header_is_joined() {
        let mut headers = HeaderMap::new();
        headers.append("accept", HeaderValue::from_static("application/json"));
        headers.append("accept", HeaderValue::from_static("text/plain"));
        headers.insert("x-traceid", HeaderValue::from_static("trace-001"));

        let map = to_flat_map(&headers);
        assert_eq!(map.len(), 2);
        assert_eq!(map["accept"], "application/json,text/plain");
        assert_eq!(map["x-traceid"], "trace-001");
    }

    #[test]
    fn test_non_utf8_value_is_lossy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-raw", HeaderValue::from_bytes(b"caf\xe9").unwrap());

        let map = to_flat_map(&headers);
        assert!(map["x-raw"].starts_with("caf"));
    }
}
