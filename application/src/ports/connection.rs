//! Connection port
//!
//! Exposes whether a session with the remote system is active and an opaque
//! identity used to detect that the operator switched connections.

/// Opaque identity of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accessor for the active connection.
///
/// Implementations live in the infrastructure layer (or the host
/// application) and are injected into the gateway and the reconciliation
/// engine.
pub trait ConnectionPort: Send + Sync {
    /// Whether a session is currently usable.
    fn is_active(&self) -> bool;

    /// Identity of the current connection, `None` when disconnected.
    fn identity(&self) -> Option<ConnectionId>;
}
