//! Query/update transport port
//!
//! Defines how the application layer reads and writes entity rows on the
//! remote system. The Web API adapter lives in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// One result row, column name -> JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Errors that can occur during transport operations
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Remote system returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Message suitable for showing to the operator.
    ///
    /// Status errors carry the remote system's own explanation, which is
    /// more useful than the HTTP wrapper around it.
    pub fn reason(&self) -> String {
        match self {
            TransportError::Status { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A FetchXML query against one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchQuery {
    /// Logical entity name (e.g. `organization`)
    pub entity: String,
    pub fetch_xml: String,
}

impl FetchQuery {
    pub fn new(entity: impl Into<String>, fetch_xml: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            fetch_xml: fetch_xml.into(),
        }
    }
}

/// Transport for entity queries and updates
#[async_trait]
pub trait DataverseTransport: Send + Sync {
    /// Run a FetchXML query and return its rows.
    async fn fetch_query(&self, query: &FetchQuery) -> Result<Vec<Row>, TransportError>;

    /// Update columns of one entity row.
    async fn update(&self, entity: &str, id: &str, fields: Row) -> Result<(), TransportError>;
}
