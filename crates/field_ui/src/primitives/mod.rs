//! Leptos control primitives rendered from resolved field and button state.

use leptos::ev::{FocusEvent, MouseEvent};
use leptos::html::ElementDescriptor;
use leptos::*;

use crate::attrs::{AttrValue, Attrs};

mod controls;

pub use controls::{Button, CheckboxField, TextArea, TextField};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Writes delegated attributes onto `element`, skipping keys the caller binds reactively.
pub(crate) fn apply_attrs<El: ElementDescriptor + 'static>(
    mut element: HtmlElement<El>,
    attrs: &Attrs,
    skip: &[&str],
) -> HtmlElement<El> {
    for (name, value) in attrs.iter() {
        if skip.contains(&name) {
            continue;
        }
        element = match value {
            AttrValue::Bool(true) => element.attr(name.to_string(), true),
            AttrValue::Bool(false) | AttrValue::Null => element,
            other => element.attr(name.to_string(), other.to_string()),
        };
    }
    element
}
