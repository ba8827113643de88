//! Ambient attribute bag passed through from the host element to the rendered control.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute keys owned by the resolver and never delegated verbatim.
pub const OWNED_ATTR_KEYS: [&str; 3] = ["class", "id", "aria-invalid"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A single passthrough attribute value as supplied by the host.
pub enum AttrValue {
    /// Boolean attribute value.
    Bool(bool),
    /// Numeric attribute value.
    Number(f64),
    /// String attribute value.
    Text(String),
    /// Explicit null; treated the same as an absent attribute.
    Null,
}

impl AttrValue {
    /// Applies HTML boolean-attribute coercion: `""`, `true`, and `"true"` are set.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(value) => value.is_empty() || value == "true",
            Self::Number(_) | Self::Null => false,
        }
    }

    /// Returns the value as a non-empty string, if it has one.
    pub fn as_non_empty_string(&self) -> Option<String> {
        match self {
            Self::Text(value) if !value.is_empty() => Some(value.clone()),
            Self::Number(value) => Some(format_number(*value)),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(value) => f.write_str(value),
            Self::Null => Ok(()),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Formats a number the way the DOM stringifies it (`5`, `1.5`, `1e+21`, `Infinity`).
pub(crate) fn format_number(value: f64) -> String {
    if value.is_infinite() {
        let token = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        return token.to_string();
    }
    // Also catches -0.
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) && !value.is_nan() {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    value.to_string()
}

/// Applies boolean-attribute coercion to an optional attribute.
pub fn is_boolean_attr_set(value: Option<&AttrValue>) -> bool {
    value.is_some_and(AttrValue::is_set)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered attribute-name to value mapping.
pub struct Attrs(BTreeMap<String, AttrValue>);

impl Attrs {
    /// Creates an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Sets the attribute when `value` is present and removes it otherwise.
    pub fn overlay(&mut self, name: &str, value: Option<AttrValue>) {
        match value {
            Some(value) => {
                self.0.insert(name.to_string(), value);
            }
            None => {
                self.0.remove(name);
            }
        }
    }

    /// Looks up an attribute; explicit nulls read as absent.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name).filter(|value| **value != AttrValue::Null)
    }

    /// Returns `true` when the attribute key exists, null or not.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of attributes in the bag.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the bag holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Copy of the bag without the resolver-owned keys.
    pub fn without_owned(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(name, _)| !OWNED_ATTR_KEYS.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
