//! Session parameters: where the catalogs live and how long notifications stay up.

use serde::{Deserialize, Serialize};

/// Community baseline catalog of organization settings
pub const DEFAULT_BASELINE_CATALOG_URL: &str = "https://raw.githubusercontent.com/seanmcne/OrgDbOrgSettings/master/mspfedyn_/OrgDbOrgSettings/Solution/WebResources/mspfedyn_/OrgDbOrgSettings/Settings.xml";

/// Community overlay catalog with additional write-ups
pub const DEFAULT_OVERLAY_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/LinkeD365/OrgSettings/master/LinkeD65OrgSettings.xml";

pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Parameters of a settings session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub baseline_catalog_url: String,
    pub overlay_catalog_url: String,
    /// Display time for error notifications
    pub notification_duration_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            baseline_catalog_url: DEFAULT_BASELINE_CATALOG_URL.to_string(),
            overlay_catalog_url: DEFAULT_OVERLAY_CATALOG_URL.to_string(),
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}

impl SessionConfig {
    // ==================== Builder Methods ====================

    pub fn with_baseline_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.baseline_catalog_url = url.into();
        self
    }

    pub fn with_overlay_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.overlay_catalog_url = url.into();
        self
    }

    pub fn with_notification_duration_ms(mut self, duration_ms: u64) -> Self {
        self.notification_duration_ms = duration_ms;
        self
    }
}
