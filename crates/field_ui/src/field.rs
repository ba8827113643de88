//! Canonical field core shared by the text-field and checkbox resolvers.

use serde::Serialize;

use crate::attrs::{is_boolean_attr_set, Attrs};
use crate::ids::{FieldIdentity, FieldIds};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Id, disabled, and validity state every field kind derives the same way.
pub struct FieldCore {
    /// Id family rooted at the resolved base id.
    pub ids: FieldIds,
    /// Ambient `disabled` coerced as a boolean attribute.
    pub disabled: bool,
    /// Error prop or truthy ambient `aria-invalid`.
    pub invalid: bool,
}

impl FieldCore {
    /// Resolves the core state for one recomputation.
    pub fn resolve(identity: &FieldIdentity, attrs: &Attrs, error: bool) -> Self {
        Self {
            ids: FieldIds::derive(identity.resolve(attrs)),
            disabled: is_boolean_attr_set(attrs.get("disabled")),
            invalid: error || is_boolean_attr_set(attrs.get("aria-invalid")),
        }
    }

    /// Space-joined `aria-describedby` value; counter first, then helper.
    pub fn described_by(&self, with_counter: bool, with_helper: bool) -> Option<String> {
        let mut ids = Vec::with_capacity(2);
        if with_counter {
            ids.push(self.ids.counter.as_str());
        }
        if with_helper {
            ids.push(self.ids.helper.as_str());
        }
        (!ids.is_empty()).then(|| ids.join(" "))
    }
}
