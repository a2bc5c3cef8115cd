//! FHIR search parameters

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insertion-ordered search parameters
///
/// A name may carry several values, rendered as a repeated parameter
/// (`date=ge2024-01-01&date=lt2024-01-01T23:59:59`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    params: IndexMap<String, Vec<String>>,
}

impl SearchParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to a single value, replacing earlier values
    ///
    /// A replaced name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), vec![value.into()]);
    }

    /// Add a value for `name`, keeping earlier values
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.entry(name.into()).or_default().push(value.into());
    }

    /// First value of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.params.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in rendering order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str())))
    }

    /// `k=v&k=v` query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for SearchParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}

impl Serialize for SearchParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (name, values) in &self.params {
            match values.as_slice() {
                [single] => map.serialize_entry(name, single)?,
                many => map.serialize_entry(name, many)?,
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for SearchParameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, OneOrMany>::deserialize(deserializer)?;
        let params = raw
            .into_iter()
            .map(|(name, values)| match values {
                OneOrMany::One(v) => (name, vec![v]),
                OneOrMany::Many(vs) => (name, vs),
            })
            .collect();
        Ok(Self { params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = SearchParameters::new();
        params.insert("gender", "male");
        params.insert("name", "Sarah");
        params.insert("gender", "female");
        assert_eq!(params.to_query_string(), "gender=female&name=Sarah");
    }

    #[test]
    fn test_append_repeats_name() {
        let mut params = SearchParameters::new();
        params.append("date", "ge2024-03-01");
        params.append("date", "lt2024-03-01T23:59:59");
        params.insert("status", "booked");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("date"), Some("ge2024-03-01"));
        assert_eq!(params.get_all("date").len(), 2);
        assert_eq!(
            params.to_query_string(),
            "date=ge2024-03-01&date=lt2024-03-01T23:59:59&status=booked"
        );
    }

    #[test]
    fn test_serialization_shape() {
        let params: SearchParameters =
            [("date", "ge1"), ("date", "lt2"), ("gender", "female")].into_iter().collect();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"date":["ge1","lt2"],"gender":"female"}"#);

        let back: SearchParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_empty() {
        let params = SearchParameters::new();
        assert!(params.is_empty());
        assert_eq!(params.get("missing"), None);
        assert!(params.get_all("missing").is_empty());
        assert_eq!(params.to_string(), "");
    }
}
