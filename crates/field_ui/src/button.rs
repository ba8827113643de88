//! Button variant and size resolution.

use leptos::logging;
use serde::{Deserialize, Deserializer, Serialize};

use crate::density::deserialize_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Shared button variants.
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered, transparent action.
    Outline,
    /// Tonal secondary action.
    Secondary,
    /// Background-free action.
    Ghost,
    /// Inline link-styled action.
    Link,
    /// Raised surface action.
    Elevated,
}

impl ButtonVariant {
    /// Stable token used in `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Elevated => "elevated",
        }
    }

    /// Lenient parse; unknown tokens fall back to [`ButtonVariant::Default`].
    pub fn from_token(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("default") => Self::Default,
            Some("destructive") => Self::Destructive,
            Some("outline") => Self::Outline,
            Some("secondary") => Self::Secondary,
            Some("ghost") => Self::Ghost,
            Some("link") => Self::Link,
            Some("elevated") => Self::Elevated,
            Some(other) => {
                logging::debug_warn!("unknown button variant `{other}`, using default");
                Self::Default
            }
        }
    }
}

impl<'de> Deserialize<'de> for ButtonVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_token(deserializer, Self::from_token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Default height.
    #[default]
    Default,
    /// Dense button.
    Sm,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Stable token used in `data-ui-size`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    /// Lenient parse; unknown tokens fall back to [`ButtonSize::Default`].
    pub fn from_token(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("default") => Self::Default,
            Some("sm") => Self::Sm,
            Some("lg") => Self::Lg,
            Some("icon") => Self::Icon,
            Some(other) => {
                logging::debug_warn!("unknown button size `{other}`, using default");
                Self::Default
            }
        }
    }
}

impl<'de> Deserialize<'de> for ButtonSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_token(deserializer, Self::from_token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
/// Resolved variant/size pair for one button.
pub struct ButtonStyle {
    /// Resolved variant.
    pub variant: ButtonVariant,
    /// Resolved size.
    pub size: ButtonSize,
}

impl ButtonStyle {
    /// Fills each absent axis with its default.
    pub fn resolve(variant: Option<ButtonVariant>, size: Option<ButtonSize>) -> Self {
        Self {
            variant: variant.unwrap_or_default(),
            size: size.unwrap_or_default(),
        }
    }

    /// `data-ui-*` attribute pairs for this style.
    pub fn data_attrs(self) -> [(&'static str, &'static str); 2] {
        [
            ("data-ui-variant", self.variant.token()),
            ("data-ui-size", self.size.token()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_axes_resolve_to_defaults() {
        let style = ButtonStyle::resolve(None, Some(ButtonSize::Lg));
        assert_eq!(style.variant, ButtonVariant::Default);
        assert_eq!(style.size, ButtonSize::Lg);
        assert_eq!(ButtonStyle::resolve(None, None), ButtonStyle::default());
    }

    #[test]
    fn tokens_round_trip_through_lenient_parse() {
        for variant in [
            ButtonVariant::Default,
            ButtonVariant::Destructive,
            ButtonVariant::Outline,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
            ButtonVariant::Elevated,
        ] {
            assert_eq!(ButtonVariant::from_token(Some(variant.token())), variant);
        }
        assert_eq!(ButtonSize::from_token(Some("icon")), ButtonSize::Icon);
        assert_eq!(ButtonSize::from_token(Some("xl")), ButtonSize::Default);
        assert_eq!(ButtonVariant::from_token(Some("primary")), ButtonVariant::Default);
    }

    #[test]
    fn data_attrs_expose_variant_and_size_tokens() {
        let style = ButtonStyle::resolve(Some(ButtonVariant::Ghost), Some(ButtonSize::Sm));
        assert_eq!(
            style.data_attrs(),
            [("data-ui-variant", "ghost"), ("data-ui-size", "sm")]
        );
    }

    #[test]
    fn unknown_tokens_deserialize_to_defaults() {
        let variant: ButtonVariant = serde_json::from_str("\"primary\"").expect("variant");
        assert_eq!(variant, ButtonVariant::Default);
        let size: ButtonSize = serde_json::from_str("\"xl\"").expect("size");
        assert_eq!(size, ButtonSize::Default);
        let size: ButtonSize = serde_json::from_str("\"icon\"").expect("size");
        assert_eq!(size, ButtonSize::Icon);
    }
}
