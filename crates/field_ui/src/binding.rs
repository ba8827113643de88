//! Two-way value binding between a field and its host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attrs::{format_number, Attrs};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Field value as bound by the host: text or a number.
pub enum FieldValue {
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Current display value: bound value, then ambient `value`, then default, else empty.
pub fn resolve_value(
    bound: Option<&FieldValue>,
    attrs: &Attrs,
    default: Option<&FieldValue>,
) -> String {
    if let Some(bound) = bound {
        return bound.to_string();
    }
    if let Some(ambient) = attrs.get("value") {
        return ambient.to_string();
    }
    default.map(ToString::to_string).unwrap_or_default()
}

/// Passive two-way binding: writes update the local copy and notify the host once.
///
/// The default value is owned by the caller's props and passed to [`ValueBinding::read`],
/// so a changed default is picked up on the next read.
pub struct ValueBinding<U> {
    bound: Option<FieldValue>,
    on_update: U,
}

impl<U> fmt::Debug for ValueBinding<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueBinding")
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl<U: FnMut(FieldValue)> ValueBinding<U> {
    /// Creates a binding from the host's current value and update channel.
    pub fn new(bound: Option<FieldValue>, on_update: U) -> Self {
        Self { bound, on_update }
    }

    /// Reads the stringified current value, falling back to ambient `value` then `default`.
    pub fn read(&self, attrs: &Attrs, default: Option<&FieldValue>) -> String {
        resolve_value(self.bound.as_ref(), attrs, default)
    }

    /// Stores `value` and emits it through the update channel exactly once.
    pub fn write(&mut self, value: impl Into<FieldValue>) {
        let value = value.into();
        self.bound = Some(value.clone());
        (self.on_update)(value);
    }

    /// Mirrors a host-side change of the bound value without emitting.
    pub fn sync(&mut self, bound: Option<FieldValue>) {
        self.bound = bound;
    }

    /// Bound value, if any.
    pub fn bound(&self) -> Option<&FieldValue> {
        self.bound.as_ref()
    }
}
