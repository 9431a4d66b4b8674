//! XML document errors

use thiserror::Error;

/// Errors raised while reading catalog documents or the settings blob
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("Missing root element <{0}>")]
    MissingRoot(String),
}

impl XmlError {
    pub(crate) fn malformed(err: impl std::fmt::Display) -> Self {
        XmlError::Malformed(err.to_string())
    }
}
