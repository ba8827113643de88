//! Headless field-state resolution and Leptos field primitives.
//!
//! The crate derives everything a rendered text field, text area, or checkbox
//! needs from a props record and the host's passthrough attributes: a stable
//! id family, disabled/invalid flags with HTML boolean-attribute coercion,
//! density layout tokens, `aria-describedby` wiring, and a sanitized attribute
//! bag for the underlying control. Resolution is total; only config loading
//! can fail. The [`primitives`] render from the resolved state using the
//! `data-ui-*` DOM contract.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod attrs;
mod binding;
mod button;
mod checkbox;
mod config;
mod density;
mod field;
mod ids;
pub mod primitives;
mod text_field;

pub use attrs::{is_boolean_attr_set, AttrValue, Attrs, OWNED_ATTR_KEYS};
pub use binding::{resolve_value, FieldValue, ValueBinding};
pub use button::{ButtonSize, ButtonStyle, ButtonVariant};
pub use checkbox::{CheckboxProps, CheckboxState, CHECKBOX_SIZE_VAR};
pub use config::{
    provide_field_config, use_field_config, ConfigError, FieldConfig, DEFAULT_ID_PREFIX,
};
pub use density::{Density, DensityTokens, FieldVariant};
pub use field::FieldCore;
pub use ids::{next_field_id, FieldIdentity, FieldIds};
pub use primitives::{Button, CheckboxField, TextArea, TextField};
pub use text_field::{
    CounterState, FieldSlots, TextFieldController, TextFieldProps, TextFieldState,
    FLOATING_LABEL_PLACEHOLDER,
};

/// Convenience imports for application crates rendering fields.
pub mod prelude {
    pub use crate::{
        provide_field_config, AttrValue, Attrs, Button, ButtonSize, ButtonVariant, CheckboxField,
        Density, FieldConfig, FieldValue, FieldVariant, TextArea, TextField,
    };
}
