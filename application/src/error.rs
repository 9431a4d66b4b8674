//! Settings error taxonomy

use crate::ports::catalog_fetcher::FetchError;
use crate::ports::dataverse::TransportError;
use orgsettings_domain::XmlError;
use thiserror::Error;

/// Expected failures of fetch and write operations.
///
/// None of these are fatal to a session: fetch failures leave an empty or
/// partial result, write failures leave dirty edits in place for a retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("No Dataverse connection available")]
    NoConnection,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected document: {0}")]
    Parse(String),

    #[error("Update rejected: {0}")]
    WriteFailure(String),
}

impl SettingsError {
    /// Operator-facing reason without the category prefix.
    pub fn reason(&self) -> String {
        match self {
            SettingsError::NoConnection => self.to_string(),
            SettingsError::Network(reason)
            | SettingsError::Parse(reason)
            | SettingsError::WriteFailure(reason) => reason.clone(),
        }
    }

    pub fn is_no_connection(&self) -> bool {
        matches!(self, SettingsError::NoConnection)
    }
}

impl From<FetchError> for SettingsError {
    fn from(err: FetchError) -> Self {
        SettingsError::Network(err.to_string())
    }
}

impl From<XmlError> for SettingsError {
    fn from(err: XmlError) -> Self {
        SettingsError::Parse(err.to_string())
    }
}

impl From<TransportError> for SettingsError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Decode(reason) => SettingsError::Parse(reason),
            other => SettingsError::Network(other.to_string()),
        }
    }
}
