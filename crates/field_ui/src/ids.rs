//! Stable field identity and the id family derived from it.

use std::cell::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

use crate::attrs::Attrs;
use crate::config::DEFAULT_ID_PREFIX;

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(0);

/// Returns a process-unique field id token with the given prefix.
pub fn next_field_id(prefix: &str) -> String {
    let sequence = NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{sequence}")
}

#[derive(Debug)]
/// Id source for one field instance.
///
/// A caller-supplied `id` attribute always wins. Otherwise a token is generated
/// on first resolution and reused for the lifetime of the instance.
pub struct FieldIdentity {
    prefix: String,
    generated: OnceCell<String>,
}

impl Default for FieldIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl FieldIdentity {
    /// Creates an identity whose generated tokens use `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            generated: OnceCell::new(),
        }
    }

    /// Resolves the base id against the current ambient attributes.
    pub fn resolve(&self, attrs: &Attrs) -> String {
        attrs
            .get("id")
            .and_then(|id| id.as_non_empty_string())
            .unwrap_or_else(|| self.generated().to_string())
    }

    fn generated(&self) -> &str {
        self.generated.get_or_init(|| next_field_id(&self.prefix))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Element ids derived deterministically from a field's base id.
pub struct FieldIds {
    /// Base id placed on the control element.
    pub base: String,
    /// `<id>-label`.
    pub label: String,
    /// `<id>-help`.
    pub helper: String,
    /// `<id>-err`.
    pub error: String,
    /// `<id>-counter`.
    pub counter: String,
}

impl FieldIds {
    /// Derives the id family for `base`.
    pub fn derive(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            label: format!("{base}-label"),
            helper: format!("{base}-help"),
            error: format!("{base}-err"),
            counter: format!("{base}-counter"),
            base,
        }
    }
}
