//! String-keyed map with case-insensitive lookups.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Map whose keys compare case-insensitively but keep the casing they were
/// inserted with.
///
/// Inserting a key that differs from an existing one only by case replaces
/// the entry, including its stored casing. Serializes as a plain JSON object
/// using the stored casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseInsensitiveMap {
    entries: BTreeMap<String, (String, String)>,
}

impl CaseInsensitiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.entries.insert(fold(&key), (key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&fold(key)).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` in case-insensitive key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CaseInsensitiveMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for CaseInsensitiveMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

fn fold(key: &str) -> String {
    key.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let map: CaseInsensitiveMap = [("MY_VAR", "value")].into_iter().collect();

        assert_eq!(map.get("my_var"), Some("value"));
        assert_eq!(map.get("My_Var"), Some("value"));
        assert!(map.contains_key("MY_VAR"));
        assert_eq!(map.get("other"), None);
    }

    #[test]
    fn test_insert_replaces_other_casing() {
        let mut map = CaseInsensitiveMap::new();
        map.insert("Path", "a");
        map.insert("PATH", "b");

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("path"), Some("b"));
        assert_eq!(map.iter().next(), Some(("PATH", "b")));
    }

    #[test]
    fn test_serializes_with_original_casing() {
        let map: CaseInsensitiveMap = [("Home", "/root"), ("LANG", "C")].into_iter().collect();

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["Home"], "/root");
        assert_eq!(json["LANG"], "C");
    }
}
