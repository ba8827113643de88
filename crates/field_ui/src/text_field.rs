//! Text-field resolver: props and ambient attributes in, derived field state out.

use serde::{Deserialize, Serialize};

use crate::attrs::{AttrValue, Attrs};
use crate::binding::{FieldValue, ValueBinding};
use crate::config::FieldConfig;
use crate::density::{Density, DensityTokens, FieldVariant};
use crate::field::FieldCore;
use crate::ids::FieldIdentity;

/// Placeholder forced onto inputs so `:placeholder-shown` tracks emptiness for floating labels.
pub const FLOATING_LABEL_PLACEHOLDER: &str = " ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Which optional content slots the host filled.
pub struct FieldSlots {
    /// Leading adornment present.
    pub leading: bool,
    /// Trailing adornment present.
    pub trailing: bool,
    /// Supporting-text slot present.
    pub supporting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Caller-owned configuration for one text field render.
pub struct TextFieldProps {
    /// Host-bound value.
    pub model_value: Option<FieldValue>,
    /// Value shown when nothing is bound.
    pub default_value: Option<FieldValue>,
    /// Floating label copy.
    pub label: Option<String>,
    /// Explicit error flag.
    pub error: bool,
    /// Density preset; the configured default applies when absent.
    pub density: Option<Density>,
    /// Variant; the configured default applies when absent.
    pub variant: Option<FieldVariant>,
    /// Extra class for the field container.
    pub field_class: Option<String>,
    /// Extra class for the input element.
    pub input_class: Option<String>,
    /// Input `type`; `text` when absent.
    pub input_type: Option<String>,
    /// Maximum character count.
    pub max_length: Option<u32>,
    /// Render a character counter when `max_length` is also set.
    pub show_counter: bool,
    /// Supporting text rendered under the field.
    pub supporting_text: Option<String>,
    /// Slot presence flags.
    pub slots: FieldSlots,
}

impl TextFieldProps {
    fn counter_max(&self) -> Option<u32> {
        if self.show_counter {
            self.max_length.filter(|max| *max > 0)
        } else {
            None
        }
    }

    fn has_supporting(&self) -> bool {
        self.slots.supporting || self.supporting_text.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Character counter shown next to length-limited fields.
pub struct CounterState {
    /// Characters currently entered.
    pub used: usize,
    /// Configured maximum.
    pub max: u32,
}

impl CounterState {
    /// `used/max` display copy.
    pub fn label(&self) -> String {
        format!("{}/{}", self.used, self.max)
    }

    /// Returns `true` when the value exceeds the limit (possible with pasted or bound values).
    pub fn is_over(&self) -> bool {
        self.used > self.max as usize
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Derived text-field state consumed by the rendering layer.
pub struct TextFieldState {
    /// Ids, disabled, and validity.
    pub core: FieldCore,
    /// Resolved density.
    pub density: Density,
    /// Layout tokens for `density`.
    pub tokens: DensityTokens,
    /// Resolved variant.
    pub variant: FieldVariant,
    /// Focus flag driven by host focus/blur events.
    pub is_focused: bool,
    /// Leading slot present.
    pub has_leading: bool,
    /// Trailing slot present.
    pub has_trailing: bool,
    /// Supporting slot or text present.
    pub has_supporting: bool,
    /// `aria-describedby` value.
    pub described_by: Option<String>,
    /// Stringified current value.
    pub value: String,
    /// Counter, when enabled.
    pub counter: Option<CounterState>,
    /// Sanitized attributes for the input element.
    pub input_attrs: Attrs,
}

impl TextFieldState {
    /// Derives the full state for one recomputation.
    pub fn derive(
        identity: &FieldIdentity,
        config: &FieldConfig,
        props: &TextFieldProps,
        attrs: &Attrs,
        value: String,
        is_focused: bool,
    ) -> Self {
        let core = FieldCore::resolve(identity, attrs, props.error);
        let density = props.density.unwrap_or(config.density);
        let counter = props.counter_max().map(|max| CounterState {
            used: value.chars().count(),
            max,
        });
        let has_supporting = props.has_supporting();
        let described_by = core.described_by(counter.is_some(), has_supporting);
        let input_attrs = delegated_input_attrs(&core, props, attrs, described_by.as_deref());

        Self {
            density,
            tokens: density.tokens(),
            variant: props.variant.unwrap_or(config.variant),
            is_focused,
            has_leading: props.slots.leading,
            has_trailing: props.slots.trailing,
            has_supporting,
            described_by,
            value,
            counter,
            input_attrs,
            core,
        }
    }

    /// Resolved control id.
    pub fn id(&self) -> &str {
        &self.core.ids.base
    }

    /// Supporting-text element id.
    pub fn helper_id(&self) -> &str {
        &self.core.ids.helper
    }

    /// Error-text element id.
    pub fn error_id(&self) -> &str {
        &self.core.ids.error
    }

    /// Counter element id.
    pub fn counter_id(&self) -> &str {
        &self.core.ids.counter
    }

    /// Disabled flag.
    pub fn disabled(&self) -> bool {
        self.core.disabled
    }

    /// Invalid flag.
    pub fn invalid(&self) -> bool {
        self.core.invalid
    }
}

fn delegated_input_attrs(
    core: &FieldCore,
    props: &TextFieldProps,
    attrs: &Attrs,
    described_by: Option<&str>,
) -> Attrs {
    let mut delegated = attrs.without_owned();
    delegated.insert("id", core.ids.base.clone());
    delegated.insert("type", props.input_type.as_deref().unwrap_or("text"));
    delegated.overlay("maxlength", props.max_length.map(AttrValue::from));
    delegated.insert("placeholder", FLOATING_LABEL_PLACEHOLDER);
    delegated.overlay("aria-invalid", core.invalid.then_some(AttrValue::Bool(true)));
    delegated.overlay("aria-describedby", described_by.map(AttrValue::from));
    delegated.overlay("disabled", core.disabled.then_some(AttrValue::Bool(true)));
    delegated
}

/// Owns the per-instance pieces of a text field: identity, focus, and value binding.
pub struct TextFieldController<U> {
    identity: FieldIdentity,
    config: FieldConfig,
    is_focused: bool,
    binding: ValueBinding<U>,
}

impl<U: FnMut(FieldValue)> TextFieldController<U> {
    /// Mounts a field with the host's initial props and update channel.
    pub fn new(props: &TextFieldProps, config: FieldConfig, on_update: U) -> Self {
        Self {
            identity: FieldIdentity::new(config.id_prefix.clone()),
            binding: ValueBinding::new(props.model_value.clone(), on_update),
            config,
            is_focused: false,
        }
    }

    /// Recomputes the derived state from the current props and attributes.
    pub fn resolve(&self, props: &TextFieldProps, attrs: &Attrs) -> TextFieldState {
        let value = self.binding.read(attrs, props.default_value.as_ref());
        TextFieldState::derive(
            &self.identity,
            &self.config,
            props,
            attrs,
            value,
            self.is_focused,
        )
    }

    /// Host focus event.
    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    /// Host blur event.
    pub fn blur(&mut self) {
        self.is_focused = false;
    }

    /// Current focus flag.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// User edit: store and emit `value`.
    pub fn write(&mut self, value: impl Into<FieldValue>) {
        self.binding.write(value);
    }

    /// Host changed the bound value.
    pub fn sync_model(&mut self, value: Option<FieldValue>) {
        self.binding.sync(value);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn controller(props: &TextFieldProps) -> TextFieldController<impl FnMut(FieldValue)> {
        TextFieldController::new(props, FieldConfig::default(), |_| {})
    }

    #[test]
    fn explicit_id_drives_every_derived_id() {
        let props = TextFieldProps::default();
        let state = controller(&props).resolve(&props, &Attrs::new().with("id", "foo"));

        assert_eq!(state.id(), "foo");
        assert_eq!(state.helper_id(), "foo-help");
        assert_eq!(state.error_id(), "foo-err");
        assert_eq!(state.counter_id(), "foo-counter");
        assert_eq!(state.input_attrs.get("id"), Some(&AttrValue::from("foo")));
    }

    #[test]
    fn generated_ids_differ_between_instances_and_hold_across_recompute() {
        let props = TextFieldProps::default();
        let first = controller(&props);
        let second = controller(&props);
        let attrs = Attrs::new();

        let first_id = first.resolve(&props, &attrs).id().to_string();
        let errored = TextFieldProps {
            error: true,
            ..props.clone()
        };
        assert_eq!(first.resolve(&errored, &attrs).id(), first_id);
        assert_ne!(second.resolve(&props, &attrs).id(), first_id);
    }

    #[test]
    fn described_by_requires_both_show_counter_and_max_length() {
        let attrs = Attrs::new().with("id", "bio");
        let limited = TextFieldProps {
            max_length: Some(120),
            ..TextFieldProps::default()
        };
        let state = controller(&limited).resolve(&limited, &attrs);
        assert_eq!(state.described_by, None);
        assert_eq!(state.counter, None);
        assert_eq!(state.input_attrs.get("aria-describedby"), None);

        let counted = TextFieldProps {
            show_counter: true,
            supporting_text: Some("Tell us about yourself".to_string()),
            ..limited
        };
        let state = controller(&counted).resolve(&counted, &attrs);
        assert_eq!(state.described_by.as_deref(), Some("bio-counter bio-help"));
        assert_eq!(state.counter.map(|counter| counter.label()), Some("0/120".to_string()));
    }

    #[test]
    fn supporting_slot_alone_adds_helper_id() {
        let props = TextFieldProps {
            slots: FieldSlots {
                supporting: true,
                ..FieldSlots::default()
            },
            ..TextFieldProps::default()
        };
        let state = controller(&props).resolve(&props, &Attrs::new().with("id", "name"));
        assert_eq!(state.described_by.as_deref(), Some("name-help"));
        assert!(state.has_supporting);
    }

    #[test]
    fn delegated_attrs_replace_owned_keys_with_resolved_values() {
        let props = TextFieldProps {
            input_type: Some("email".to_string()),
            max_length: Some(64),
            ..TextFieldProps::default()
        };
        let attrs: Attrs = serde_json::from_value(json!({
            "class": "wide",
            "id": "email",
            "aria-invalid": "",
            "disabled": "true",
            "name": "email",
            "autocomplete": "email"
        }))
        .expect("attrs");

        let state = controller(&props).resolve(&props, &attrs);
        let expected: Attrs = serde_json::from_value(json!({
            "aria-invalid": true,
            "autocomplete": "email",
            "disabled": true,
            "id": "email",
            "maxlength": 64.0,
            "name": "email",
            "placeholder": " ",
            "type": "email"
        }))
        .expect("expected attrs");

        assert_eq!(state.input_attrs, expected);
        assert!(!state.input_attrs.contains("class"));
        assert!(state.invalid());
        assert!(state.disabled());
    }

    #[test]
    fn unresolved_overlays_remove_ambient_duplicates() {
        let props = TextFieldProps::default();
        let attrs = Attrs::new()
            .with("disabled", "false")
            .with("maxlength", 5u32)
            .with("aria-describedby", "stale");

        let state = controller(&props).resolve(&props, &attrs);
        assert!(!state.input_attrs.contains("disabled"));
        assert!(!state.input_attrs.contains("maxlength"));
        assert!(!state.input_attrs.contains("aria-describedby"));
        assert!(!state.input_attrs.contains("aria-invalid"));
        assert_eq!(state.input_attrs.get("type"), Some(&AttrValue::from("text")));
    }

    #[test]
    fn density_and_variant_fall_back_to_config() {
        let props = TextFieldProps::default();
        let config = FieldConfig {
            density: Density::Compact,
            variant: FieldVariant::Outlined,
            ..FieldConfig::default()
        };
        let state = TextFieldController::new(&props, config, |_| {}).resolve(&props, &Attrs::new());
        assert_eq!(state.density, Density::Compact);
        assert_eq!(state.tokens.field_height, "h-10");
        assert_eq!(state.variant, FieldVariant::Outlined);

        let explicit = TextFieldProps {
            density: Some(Density::Comfortable),
            ..props
        };
        let state = controller(&explicit).resolve(&explicit, &Attrs::new());
        assert_eq!(state.tokens.input_padding, "pt-4 pb-2");
        assert_eq!(state.variant, FieldVariant::Filled);
    }

    #[test]
    fn focus_and_blur_toggle_focus_flag() {
        let props = TextFieldProps::default();
        let mut field = controller(&props);
        assert!(!field.resolve(&props, &Attrs::new()).is_focused);

        field.focus();
        assert!(field.is_focused());
        assert!(field.resolve(&props, &Attrs::new()).is_focused);

        field.blur();
        assert!(!field.resolve(&props, &Attrs::new()).is_focused);
    }

    #[test]
    fn writes_emit_once_and_feed_value_and_counter() {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        let props = TextFieldProps {
            default_value: Some(FieldValue::from("draft")),
            max_length: Some(4),
            show_counter: true,
            ..TextFieldProps::default()
        };
        let mut field = TextFieldController::new(&props, FieldConfig::default(), move |value| {
            sink.borrow_mut().push(value)
        });

        assert_eq!(field.resolve(&props, &Attrs::new()).value, "draft");

        field.write("héllo");
        let state = field.resolve(&props, &Attrs::new());
        assert_eq!(state.value, "héllo");
        let counter = state.counter.expect("counter");
        assert_eq!(counter.used, 5);
        assert!(counter.is_over());
        assert_eq!(*emitted.borrow(), vec![FieldValue::from("héllo")]);

        field.sync_model(Some(FieldValue::from(12)));
        assert_eq!(field.resolve(&props, &Attrs::new()).value, "12");
        assert_eq!(emitted.borrow().len(), 1);
    }

    #[test]
    fn unknown_presets_in_props_json_resolve_to_defaults() {
        let raw = json!({ "density": "roomy", "variant": "tonal", "label": "Name" });
        let props: TextFieldProps = serde_json::from_value(raw).expect("props");
        assert_eq!(props.density, Some(Density::Default));
        assert_eq!(props.label.as_deref(), Some("Name"));

        let state = controller(&props).resolve(&props, &Attrs::new());
        assert_eq!(state.tokens, Density::Default.tokens());
        assert_eq!(state.variant, FieldVariant::Filled);
    }

    #[test]
    fn default_value_change_is_read_on_next_resolve() {
        let props = TextFieldProps {
            default_value: Some(FieldValue::from("first")),
            ..TextFieldProps::default()
        };
        let field = controller(&props);
        assert_eq!(field.resolve(&props, &Attrs::new()).value, "first");

        let changed = TextFieldProps {
            default_value: Some(FieldValue::from(2)),
            ..props
        };
        assert_eq!(field.resolve(&changed, &Attrs::new()).value, "2");
    }

    #[test]
    fn ambient_value_used_when_nothing_is_bound() {
        let props = TextFieldProps::default();
        let state = controller(&props).resolve(&props, &Attrs::new().with("value", "from-host"));
        assert_eq!(state.value, "from-host");
        assert_eq!(state.input_attrs.get("value"), Some(&AttrValue::from("from-host")));
    }
}
