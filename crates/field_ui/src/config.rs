//! Library-wide field defaults loaded from JSON and shared through Leptos context.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::density::{Density, FieldVariant};

/// Prefix used for generated field ids when no config overrides it.
pub const DEFAULT_ID_PREFIX: &str = "field";

#[derive(Debug, Error)]
/// Failure loading a [`FieldConfig`].
pub enum ConfigError {
    /// The payload was not valid config JSON.
    #[error("field config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The id prefix would produce unusable element ids.
    #[error("invalid field id prefix `{0}`: must be non-empty and contain no whitespace")]
    InvalidIdPrefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Defaults applied when a field's props leave a setting unspecified.
pub struct FieldConfig {
    /// Prefix for generated ids (`<prefix>-<n>`).
    pub id_prefix: String,
    /// Density used when a field does not set one.
    pub density: Density,
    /// Variant used when a text field does not set one.
    pub variant: FieldVariant,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            density: Density::Default,
            variant: FieldVariant::Filled,
        }
    }
}

impl FieldConfig {
    /// Parses and validates a JSON config payload.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_prefix.is_empty() || self.id_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidIdPrefix(self.id_prefix.clone()));
        }
        Ok(())
    }

    /// Parses `raw`, logging and falling back to defaults on failure.
    pub fn from_json_str_or_default(raw: &str) -> Self {
        match Self::from_json_str(raw) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("{err}; using default field config");
                Self::default()
            }
        }
    }
}

/// Makes `config` available to every field primitive below the current owner.
pub fn provide_field_config(config: FieldConfig) {
    leptos::provide_context(config);
}

/// Config from context, or the defaults when none was provided.
pub fn use_field_config() -> FieldConfig {
    leptos::use_context::<FieldConfig>().unwrap_or_default()
}
