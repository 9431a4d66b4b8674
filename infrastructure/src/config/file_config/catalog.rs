//! Catalog locations from TOML (`[catalog]` section)

use orgsettings_application::config::session_config::{
    DEFAULT_BASELINE_CATALOG_URL, DEFAULT_OVERLAY_CATALOG_URL,
};
use serde::{Deserialize, Serialize};

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Baseline descriptor catalog (`defaultOrgSettings` document)
    pub baseline_url: String,
    /// Community overlay catalog with additional links
    pub overlay_url: String,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            baseline_url: DEFAULT_BASELINE_CATALOG_URL.to_string(),
            overlay_url: DEFAULT_OVERLAY_CATALOG_URL.to_string(),
        }
    }
}
