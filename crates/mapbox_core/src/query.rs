//! Query string assembly.
//!
//! Parameters are kept sorted by key so encoded URLs are deterministic.
//! Empty values are never emitted.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Timestamp layout accepted by the directions `depart_at`/`arrive_by` options.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Ordered query parameters for one request.
///
/// ```
/// use mapbox_core::QueryParams;
///
/// let mut query = QueryParams::new();
/// query.set("q", "Paris");
/// query.set("country", "");
/// query.join("types", ["place", "poi"], ",");
/// let pairs: Vec<_> = query.iter().collect();
/// assert_eq!(pairs, vec![("q", "Paris"), ("types", "place,poi")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Set `key` only when `value` is present.
    pub fn set_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
    }

    /// Set `key` to `true`/`false` when present.
    pub fn set_bool(&mut self, key: &str, value: Option<bool>) {
        self.set_opt(key, value);
    }

    /// Set `key` to a float with two decimals when present and non-zero.
    pub fn set_fixed2(&mut self, key: &str, value: Option<f64>) {
        self.set_opt(
            key,
            value.filter(|v| *v != 0.0).map(|v| format!("{:.2}", v)),
        );
    }

    /// Set `key` when `value` is non-zero.
    pub fn set_nonzero<V: ToString + Default + PartialEq>(&mut self, key: &str, value: V) {
        if value != V::default() {
            self.set(key, value.to_string());
        }
    }

    /// Join `values` with `sep` under `key`; nothing is set for an empty list.
    pub fn join<I, V>(&mut self, key: &str, values: I, sep: &str)
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(sep);
        self.set(key, joined);
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Non-empty pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of non-empty pairs.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no pair would be emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn keys_are_sorted_and_empties_dropped() {
        let mut query = QueryParams::new();
        query.set("z", "1");
        query.set("a", "2");
        query.set("m", "");
        query.join("list", Vec::<String>::new(), ",");
        let keys: Vec<_> = query.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "z"]);
        assert_eq!(query.get("m"), None);
    }

    #[test]
    fn numeric_helpers() {
        let mut query = QueryParams::new();
        query.set_fixed2("walking_speed", Some(1.5));
        query.set_fixed2("alley_bias", Some(0.0));
        query.set_nonzero("limit", 0u32);
        query.set_nonzero("max_height", 3.5f64);
        query.set_bool("steps", Some(false));
        assert_eq!(query.get("walking_speed"), Some("1.50"));
        assert_eq!(query.get("alley_bias"), None);
        assert_eq!(query.get("limit"), None);
        assert_eq!(query.get("max_height"), Some("3.5"));
        assert_eq!(query.get("steps"), Some("false"));
    }

    #[test]
    fn timestamps_use_utc_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
        assert_eq!(format_timestamp(&at), "2024-03-09T07:05:00Z");
    }
}
