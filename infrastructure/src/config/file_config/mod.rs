//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

mod catalog;
mod connection;
mod output;

pub use catalog::FileCatalogConfig;
pub use connection::FileConnectionConfig;
pub use output::FileOutputConfig;

use orgsettings_application::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} cannot be empty")]
    EmptyCatalogUrl { field: &'static str },

    #[error("connection.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog locations
    pub catalog: FileCatalogConfig,
    /// Dataverse environment
    pub connection: FileConnectionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Append the operator event log to this JSONL file
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.catalog.baseline_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCatalogUrl {
                field: "catalog.baseline_url",
            });
        }
        if self.catalog.overlay_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCatalogUrl {
                field: "catalog.overlay_url",
            });
        }
        if self.connection.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Session parameters for the application layer
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_baseline_catalog_url(self.catalog.baseline_url.trim())
            .with_overlay_catalog_url(self.catalog.overlay_url.trim())
            .with_notification_duration_ms(self.output.notification_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
log_file = "/tmp/orgsettings.jsonl"

[catalog]
baseline_url = "http://localhost/Settings.xml"
overlay_url = "http://localhost/Overlay.xml"

[connection]
url = "https://contoso.crm.dynamics.com"
api_version = "v9.1"

[output]
color = false
notification_duration_ms = 5000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.baseline_url, "http://localhost/Settings.xml");
        assert_eq!(config.connection.base_url(), Some("https://contoso.crm.dynamics.com"));
        assert_eq!(config.connection.api_version, "v9.1");
        assert!(config.connection.token.is_none());
        assert!(!config.output.color);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/orgsettings.jsonl")));

        let session = config.session_config();
        assert_eq!(session.overlay_catalog_url, "http://localhost/Overlay.xml");
        assert_eq!(session.notification_duration_ms, 5000);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.output.color);
        assert_eq!(config.connection.api_version, "v9.2");
        assert_eq!(config.connection.timeout_seconds, 30);
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_catalog_url() {
        let mut config = FileConfig::default();
        config.catalog.baseline_url = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyCatalogUrl {
                field: "catalog.baseline_url"
            })
        );
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.connection.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }
}
