//! Catalog fetcher port
//!
//! Retrieves the raw catalog documents. Parsing is done by the domain layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while downloading a catalog document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Network response was not ok ({0})")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Downloads catalog documents by URL
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_document(&self, url: &str) -> Result<String, FetchError>;
}
