//! Output configuration from TOML (`[output]` section)

use orgsettings_application::config::session_config::DEFAULT_NOTIFICATION_DURATION_MS;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// How long error notifications stay visible
    pub notification_duration_ms: u64,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}
