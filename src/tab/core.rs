//! Core Tab struct and parameter values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

// ============================================================================
// Types
// ============================================================================

/// Query-like parameters attached to a tab.
///
/// Ordered by key so equality and the serialized form are deterministic.
pub type Params = BTreeMap<String, ParamValue>;

/// A single parameter value: a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Numeric value.
    Number(Number),
    /// String value.
    Text(String),
}

impl ParamValue {
    /// Returns the string value, if this is text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Returns the value as `i64`, if it is an integral number.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            Self::Text(_) => None,
        }
    }

    /// Returns the value as `f64`, if it is a number.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(_) => None,
        }
    }

    /// Parses a raw query value.
    ///
    /// Values whose numeric form prints back identically become numbers,
    /// so `"5"` is a number but `"007"` and `"1e3"` stay text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Ok(int) = raw.parse::<i64>()
            && int.to_string() == raw
        {
            return Self::Number(int.into());
        }

        if let Ok(float) = raw.parse::<f64>()
            && float.to_string() == raw
            && let Some(number) = Number::from_f64(float)
        {
            return Self::Number(number);
        }

        Self::Text(raw.to_string())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for ParamValue {
    /// Non-finite floats have no JSON number form and are kept as text.
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or_else(|| Self::Text(value.to_string()))
    }
}

// ============================================================================
// Tab
// ============================================================================

/// One logical route entry.
///
/// `path` is the tab's identity: a tab list never holds two tabs with the
/// same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Logical route identifier.
    pub path: String,
    /// Query-like parameters.
    #[serde(default)]
    pub params: Params,
}

impl Tab {
    /// Creates a tab with no parameters.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Params::new(),
        }
    }

    /// Creates a tab with the given parameters.
    #[inline]
    #[must_use]
    pub fn with_params(path: impl Into<String>, params: Params) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Adds a single parameter.
    #[inline]
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns a parameter by key.
    #[inline]
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_parse_integer() {
        assert_eq!(ParamValue::parse("5").as_i64(), Some(5));
        assert_eq!(ParamValue::parse("-12").as_i64(), Some(-12));
    }

    #[test]
    fn test_param_value_parse_keeps_non_canonical_numbers_as_text() {
        assert_eq!(ParamValue::parse("007"), ParamValue::from("007"));
        assert_eq!(ParamValue::parse("1e3"), ParamValue::from("1e3"));
        assert_eq!(ParamValue::parse("abc"), ParamValue::from("abc"));
    }

    #[test]
    fn test_param_value_parse_float() {
        assert_eq!(ParamValue::parse("1.5").as_f64(), Some(1.5));
    }

    #[test]
    fn test_param_value_from_nan_is_text() {
        assert!(ParamValue::from(f64::NAN).as_str().is_some());
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::from(5).to_string(), "5");
        assert_eq!(ParamValue::from("x").to_string(), "x");
    }

    #[test]
    fn test_tab_serializes_params_as_map() {
        let tab = Tab::new("/users").with_param("id", 5).with_param("q", "bob");
        let json = serde_json::to_string(&tab).unwrap();
        assert_eq!(json, r#"{"path":"/users","params":{"id":5,"q":"bob"}}"#);
    }

    #[test]
    fn test_tab_deserializes_without_params() {
        let tab: Tab = serde_json::from_str(r#"{"path":"/a"}"#).unwrap();
        assert_eq!(tab, Tab::new("/a"));
    }

    #[test]
    fn test_tab_rejects_non_map_params() {
        let result = serde_json::from_str::<Tab>(r#"{"path":"/a","params":[1,2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_param_lookup() {
        let tab = Tab::new("/a").with_param("id", 1);
        assert_eq!(tab.param("id"), Some(&ParamValue::from(1)));
        assert!(tab.param("missing").is_none());
    }
}
