//! Checkbox resolver built on the canonical field core.

use serde::{Deserialize, Serialize};

use crate::attrs::{AttrValue, Attrs};
use crate::config::FieldConfig;
use crate::density::Density;
use crate::field::FieldCore;
use crate::ids::FieldIdentity;

/// CSS custom property carrying the checkbox edge length.
pub const CHECKBOX_SIZE_VAR: &str = "--cb-size";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Caller-owned configuration for one checkbox render.
pub struct CheckboxProps {
    /// Density preset; the configured default applies when absent.
    pub density: Option<Density>,
    /// Extra class for the checkbox root.
    pub class: Option<String>,
    /// Label copy.
    pub label: Option<String>,
    /// Supporting text rendered under the label.
    pub supporting_text: Option<String>,
    /// Explicit error flag.
    pub error: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Derived checkbox state consumed by the rendering layer.
pub struct CheckboxState {
    /// Ids, disabled, and validity.
    pub core: FieldCore,
    /// Resolved density.
    pub density: Density,
    /// Box edge length for `density`.
    pub size: &'static str,
    /// `aria-describedby` value.
    pub described_by: Option<String>,
    /// Label wrapper aligns to the top when supporting text is present.
    pub align_start: bool,
    /// Sanitized attributes for the checkbox input.
    pub input_attrs: Attrs,
}

impl CheckboxState {
    /// Derives checkbox state for one recomputation.
    pub fn derive(
        identity: &FieldIdentity,
        config: &FieldConfig,
        props: &CheckboxProps,
        attrs: &Attrs,
    ) -> Self {
        let core = FieldCore::resolve(identity, attrs, props.error);
        let density = props.density.unwrap_or(config.density);
        let has_supporting = props.supporting_text.is_some();
        let described_by = core.described_by(false, has_supporting);

        let mut input_attrs = attrs.without_owned();
        input_attrs.insert("id", core.ids.base.clone());
        input_attrs.insert("type", "checkbox");
        input_attrs.overlay("aria-invalid", core.invalid.then_some(AttrValue::Bool(true)));
        input_attrs.overlay(
            "aria-describedby",
            described_by.as_deref().map(AttrValue::from),
        );
        input_attrs.overlay(
            "aria-labelledby",
            props
                .label
                .as_ref()
                .map(|_| AttrValue::from(core.ids.label.clone())),
        );
        input_attrs.overlay("disabled", core.disabled.then_some(AttrValue::Bool(true)));

        Self {
            density,
            size: density.checkbox_size(),
            described_by,
            align_start: has_supporting,
            input_attrs,
            core,
        }
    }

    /// Inline style declaring the size variable, e.g. `--cb-size: 18px`.
    pub fn style(&self) -> String {
        format!("{CHECKBOX_SIZE_VAR}: {}", self.size)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn derive(props: &CheckboxProps, attrs: &Attrs) -> CheckboxState {
        CheckboxState::derive(&FieldIdentity::default(), &FieldConfig::default(), props, attrs)
    }

    #[test]
    fn ids_and_described_by_follow_canonical_core() {
        let props = CheckboxProps {
            label: Some("Accept terms".to_string()),
            supporting_text: Some("Required to continue".to_string()),
            ..CheckboxProps::default()
        };
        let state = derive(&props, &Attrs::new().with("id", "terms"));

        assert_eq!(state.core.ids.label, "terms-label");
        assert_eq!(state.core.ids.helper, "terms-help");
        assert_eq!(state.described_by.as_deref(), Some("terms-help"));
        assert!(state.align_start);
        assert_eq!(
            state.input_attrs.get("aria-labelledby"),
            Some(&AttrValue::from("terms-label"))
        );
    }

    #[test]
    fn no_supporting_text_omits_described_by() {
        let state = derive(&CheckboxProps::default(), &Attrs::new());
        assert_eq!(state.described_by, None);
        assert!(!state.align_start);
        assert!(!state.input_attrs.contains("aria-describedby"));
        assert!(!state.input_attrs.contains("aria-labelledby"));
    }

    #[test]
    fn aria_invalid_passthrough_is_coerced_not_forwarded_raw() {
        let attrs = Attrs::new().with("aria-invalid", "false").with("class", "x");
        let state = derive(&CheckboxProps::default(), &attrs);
        assert!(!state.core.invalid);
        assert!(!state.input_attrs.contains("aria-invalid"));
        assert!(!state.input_attrs.contains("class"));

        let state = derive(&CheckboxProps::default(), &Attrs::new().with("aria-invalid", ""));
        assert_eq!(state.input_attrs.get("aria-invalid"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn size_variable_tracks_density() {
        let compact = CheckboxProps {
            density: Some(Density::Compact),
            ..CheckboxProps::default()
        };
        assert_eq!(derive(&compact, &Attrs::new()).style(), "--cb-size: 16px");
        assert_eq!(derive(&CheckboxProps::default(), &Attrs::new()).style(), "--cb-size: 18px");
    }

    #[test]
    fn unknown_density_in_props_json_uses_default_size() {
        for density in [json!("huge"), json!(12)] {
            let props: CheckboxProps =
                serde_json::from_value(json!({ "density": density, "label": "Subscribe" }))
                    .expect("props");
            assert_eq!(props.label.as_deref(), Some("Subscribe"));
            assert_eq!(derive(&props, &Attrs::new()).style(), "--cb-size: 18px");
        }
    }
}
