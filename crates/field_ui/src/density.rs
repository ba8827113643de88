//! Density and variant presets plus their fixed layout token lookups.

use leptos::logging;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Sizing preset controlling field height and padding.
pub enum Density {
    /// 56px tall field.
    #[default]
    Default,
    /// 48px tall field.
    Comfortable,
    /// 40px tall field.
    Compact,
}

impl Density {
    /// Stable token used in `data-ui-density`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Comfortable => "comfortable",
            Self::Compact => "compact",
        }
    }

    /// Lenient parse; unknown or missing tokens fall back to [`Density::Default`].
    pub fn from_token(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("default") => Self::Default,
            Some("comfortable") => Self::Comfortable,
            Some("compact") => Self::Compact,
            Some(other) => {
                logging::debug_warn!("unknown field density `{other}`, using default");
                Self::Default
            }
        }
    }

    /// Text-field layout tokens for this density.
    pub fn tokens(self) -> DensityTokens {
        match self {
            Self::Comfortable => DensityTokens {
                field_height: "h-12",
                input_padding: "pt-4 pb-2",
                label_float_top: "0.5rem",
            },
            Self::Compact => DensityTokens {
                field_height: "h-10",
                input_padding: "pt-3 pb-1",
                label_float_top: "0.375rem",
            },
            Self::Default => DensityTokens {
                field_height: "h-14",
                input_padding: "pt-5 pb-2",
                label_float_top: "0.5rem",
            },
        }
    }

    /// Checkbox box edge length for this density.
    pub fn checkbox_size(self) -> &'static str {
        match self {
            Self::Comfortable => "20px",
            Self::Compact => "16px",
            Self::Default => "18px",
        }
    }
}

impl<'de> Deserialize<'de> for Density {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_token(deserializer, Self::from_token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Density-dependent layout tokens consumed by the rendering layer.
pub struct DensityTokens {
    /// Field container height token.
    pub field_height: &'static str,
    /// Input padding token.
    pub input_padding: &'static str,
    /// Offset of the floating label from the field top.
    pub label_float_top: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Visual style family for text fields. Style only, no behavioral effect.
pub enum FieldVariant {
    /// Filled container.
    #[default]
    Filled,
    /// Outlined container.
    Outlined,
}

impl FieldVariant {
    /// Stable token used in `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
        }
    }

    /// Lenient parse; unknown or missing tokens fall back to [`FieldVariant::Filled`].
    pub fn from_token(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("filled") => Self::Filled,
            Some("outlined") => Self::Outlined,
            Some(other) => {
                logging::debug_warn!("unknown field variant `{other}`, using filled");
                Self::Filled
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_token(deserializer, Self::from_token)
    }
}

/// Reads a preset token through its lenient `from_token`; non-string payloads
/// resolve like a missing token.
pub(crate) fn deserialize_token<'de, D, T>(
    deserializer: D,
    from_token: fn(Option<&str>) -> T,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawToken {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match RawToken::deserialize(deserializer)? {
        RawToken::Text(raw) => from_token(Some(&raw)),
        RawToken::Other(_) => {
            logging::debug_warn!("non-string preset token, using default");
            from_token(None)
        }
    })
}
