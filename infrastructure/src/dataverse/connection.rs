//! Connection from configuration.

use orgsettings_application::ports::connection::{ConnectionId, ConnectionPort};

/// A connection fixed for the lifetime of the process.
///
/// Active when an environment URL is configured; the URL is its identity.
#[derive(Debug, Clone, Default)]
pub struct StaticConnection {
    base_url: Option<String>,
}

impl StaticConnection {
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

impl ConnectionPort for StaticConnection {
    fn is_active(&self) -> bool {
        self.base_url.is_some()
    }

    fn identity(&self) -> Option<ConnectionId> {
        self.base_url.as_deref().map(ConnectionId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_connection_is_active() {
        let connection = StaticConnection::new(Some("https://contoso.crm.dynamics.com/"));
        assert!(connection.is_active());
        assert_eq!(
            connection.identity(),
            Some(ConnectionId::new("https://contoso.crm.dynamics.com"))
        );
    }

    #[test]
    fn test_blank_url_is_inactive() {
        assert!(!StaticConnection::new(Some("  ")).is_active());
        assert!(StaticConnection::new(None).identity().is_none());
    }
}
