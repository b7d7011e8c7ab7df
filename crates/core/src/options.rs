//! Render options - named settings consumed opaquely by rendering sinks.
//!
//! The scene carries a set of defaults; each render call may pass overrides.
//! Call-level values win when present and non-empty.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// String-keyed option map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderOptions(BTreeMap<String, String>);

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// First character of a non-empty value.
    pub fn get_char(&self, key: &str) -> Option<char> {
        self.get(key).and_then(|v| v.chars().next())
    }

    /// Parse a value; unparsable values read as absent.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge scene defaults with call-level overrides.
    ///
    /// An override replaces a default only when its value is non-empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use swears_core::RenderOptions;
    ///
    /// let defaults = RenderOptions::new().with("blank", ".").with("left", "2");
    /// let call = RenderOptions::new().with("blank", "#").with("left", "");
    /// let merged = RenderOptions::merged(&defaults, &call);
    /// assert_eq!(merged.get("blank"), Some("#"));
    /// assert_eq!(merged.get("left"), Some("2"));
    /// ```
    pub fn merged(defaults: &RenderOptions, overrides: &RenderOptions) -> RenderOptions {
        let mut out = defaults.clone();
        for (k, v) in &overrides.0 {
            if !v.is_empty() {
                out.0.insert(k.clone(), v.clone());
            }
        }
        out
    }

    /// Parse a flat JSON object.
    ///
    /// Scalar values are stringified (`2` becomes `"2"`, `true` becomes
    /// `"true"`); `null` entries are dropped.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(s)?;
        let map = raw
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some((k, s)),
                other => Some((k, other.to_string())),
            })
            .collect();
        Ok(Self(map))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenderOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
