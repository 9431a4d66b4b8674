//! Setting descriptors: static metadata about one organization setting.
//!
//! Descriptors come from the baseline catalog and are optionally enriched
//! with a link and description from the community overlay catalog. They are
//! never mutated after enrichment.

use crate::core::name::setting_key;
use crate::setting::value_policy::NumericBounds;
use serde::{Deserialize, Serialize};

/// Value type declared by the catalog's `settingType` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Boolean,
    Number,
    #[default]
    String,
}

impl ValueType {
    /// Parse the catalog's `settingType` attribute.
    ///
    /// Unrecognized or empty types are edited as free text.
    pub fn from_catalog(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "boolean" | "bool" => ValueType::Boolean,
            "number" | "int" | "integer" | "double" | "decimal" => ValueType::Number,
            _ => ValueType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Boolean => "Boolean",
            ValueType::Number => "Number",
            ValueType::String => "String",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static metadata about one setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingDescriptor {
    /// Setting name as spelled by the baseline catalog
    pub name: String,
    /// Rich text, may contain markup; transported verbatim
    pub description: String,
    pub value_type: ValueType,
    /// Only meaningful for [`ValueType::Number`]
    pub bounds: NumericBounds,
    /// Advisory only
    pub min_supported_version: Option<String>,
    /// Advisory only
    pub max_supported_version: Option<String>,
    pub default_value: String,
    pub support_url: Option<String>,
    pub support_url_title: Option<String>,
    /// Populated by the overlay catalog
    pub overlay_url: Option<String>,
    /// Populated by the overlay catalog
    pub overlay_description: Option<String>,
}

impl SettingDescriptor {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            ..Default::default()
        }
    }

    pub fn with_bounds(mut self, bounds: NumericBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Normalized join key.
    pub fn key(&self) -> String {
        setting_key(&self.name)
    }

    /// Whether an overlay catalog entry was merged into this descriptor.
    pub fn has_overlay(&self) -> bool {
        self.overlay_url.is_some() || self.overlay_description.is_some()
    }

    /// Human readable supported-version range, if the catalog gave one.
    pub fn version_range(&self) -> Option<String> {
        match (&self.min_supported_version, &self.max_supported_version) {
            (None, None) => None,
            (Some(min), None) => Some(format!("{} and later", min)),
            (None, Some(max)) => Some(format!("up to {}", max)),
            (Some(min), Some(max)) => Some(format!("{} - {}", min, max)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_from_catalog() {
        assert_eq!(ValueType::from_catalog("Boolean"), ValueType::Boolean);
        assert_eq!(ValueType::from_catalog("number"), ValueType::Number);
        assert_eq!(ValueType::from_catalog("String"), ValueType::String);
        assert_eq!(ValueType::from_catalog(""), ValueType::String);
        assert_eq!(ValueType::from_catalog("Guid"), ValueType::String);
    }

    #[test]
    fn test_descriptor_key_is_normalized() {
        let descriptor = SettingDescriptor::new(" EnableRetrieveMultipleOptimization ", ValueType::Number);
        assert_eq!(descriptor.key(), "enableretrievemultipleoptimization");
    }

    #[test]
    fn test_version_range() {
        let mut descriptor = SettingDescriptor::new("Foo", ValueType::String);
        assert_eq!(descriptor.version_range(), None);

        descriptor.min_supported_version = Some("9.0.0.0".into());
        assert_eq!(descriptor.version_range().as_deref(), Some("9.0.0.0 and later"));

        descriptor.max_supported_version = Some("9.2.0.0".into());
        assert_eq!(descriptor.version_range().as_deref(), Some("9.0.0.0 - 9.2.0.0"));
    }
}
