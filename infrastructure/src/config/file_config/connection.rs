//! Connection configuration from TOML (`[connection]` section)

use serde::{Deserialize, Serialize};

/// Raw connection configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConnectionConfig {
    /// Environment base URL, e.g. `https://contoso.crm.dynamics.com`
    pub url: Option<String>,
    /// Bearer token (prefer `ORGSETTINGS_CONNECTION__TOKEN` over the file)
    pub token: Option<String>,
    /// Web API version segment
    pub api_version: String,
    /// Request timeout for every HTTP call
    pub timeout_seconds: u64,
}

impl Default for FileConnectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            api_version: "v9.2".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileConnectionConfig {
    /// Base URL without a trailing slash, `None` if unset or blank.
    pub fn base_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let mut config = FileConnectionConfig::default();
        assert!(config.base_url().is_none());

        config.url = Some("https://contoso.crm.dynamics.com/ ".to_string());
        assert_eq!(config.base_url(), Some("https://contoso.crm.dynamics.com"));

        config.url = Some("   ".to_string());
        assert!(config.base_url().is_none());
    }
}
