//! Request values and the ordered request map.
//!
//! A `Request` is built per call by the caller, handed to the translator,
//! and discarded. Entries keep their insertion order so a given request
//! always produces the same command plan.

use serde::Deserialize;
use std::fmt;

/// A single option value supplied by a caller.
///
/// Deserializes from plain JSON scalars and string arrays, so `12`, `true`,
/// `"text"` and `["a", "b"]` map to the matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    /// Returns the values as a list of words, treating a scalar as a
    /// one-element list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            OptionValue::List(items) => items.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::List(items) => f.write_str(&items.join(" ")),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

/// Values above `i64::MAX` become decimal text, which number-typed options
/// still accept.
impl From<u64> for OptionValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => OptionValue::Number(n),
            Err(_) => OptionValue::Text(value.to_string()),
        }
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Number(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        OptionValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// An ordered mapping from option name to value.
///
/// Setting a name that is already present replaces its value in place,
/// keeping the original position.
///
/// ```rust
/// use depot_core::options::Request;
///
/// let request = Request::new()
///     .with("changelist", 42u64)
///     .with("files", vec!["//depot/a.c", "//depot/b.c"]);
/// assert_eq!(request.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    entries: Vec<(String, OptionValue)>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an option, returning the request for chaining.
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Adds or replaces an option.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Removes an option, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Request
where
    K: AsRef<str>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = Request::new();
        for (name, value) in iter {
            request.set(name.as_ref(), value);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut request = Request::new().with("a", 1i64).with("b", "x");
        request.set("a", 2i64);

        let names: Vec<&str> = request.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(request.get("a"), Some(&OptionValue::Number(2)));
    }

    #[test]
    fn test_scalar_to_list() {
        assert_eq!(OptionValue::from("//depot/a").to_list(), vec!["//depot/a"]);
        assert_eq!(OptionValue::from(7i64).to_list(), vec!["7"]);
    }

    #[test]
    fn test_large_u64_does_not_wrap() {
        assert_eq!(OptionValue::from(42u64), OptionValue::Number(42));
        assert_eq!(
            OptionValue::from(u64::MAX),
            OptionValue::Text("18446744073709551615".into())
        );
    }

    #[test]
    fn test_untagged_json_values() {
        let value: OptionValue = serde_json::from_str(r#"["x", "y"]"#).unwrap();
        assert_eq!(value, OptionValue::List(vec!["x".into(), "y".into()]));
        let value: OptionValue = serde_json::from_str("12").unwrap();
        assert_eq!(value, OptionValue::Number(12));
    }
}
