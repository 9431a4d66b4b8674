//! Catalog document download over HTTP(S).

use async_trait::async_trait;
use orgsettings_application::ports::catalog_fetcher::{CatalogFetcher, FetchError};
use tracing::debug;

/// Maximum catalog document size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// [`CatalogFetcher`] backed by a shared `reqwest::Client`.
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
    max_body_size: usize,
}

impl HttpCatalogFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            max_body_size: MAX_BODY_SIZE,
        }
    }

    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    fn too_large(&self, size: u64) -> FetchError {
        FetchError::Body(format!(
            "document too large: {} bytes (max: {} bytes)",
            size, self.max_body_size
        ))
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch_document(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(length) = response.content_length()
            && length > self.max_body_size as u64
        {
            return Err(self.too_large(length));
        }

        // Chunked responses carry no length; stop reading once over the limit
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?
        {
            if body.len() + chunk.len() > self.max_body_size {
                return Err(self.too_large((body.len() + chunk.len()) as u64));
            }
            body.extend_from_slice(&chunk);
        }
        debug!("Fetched {} bytes from {}", body.len(), url);

        String::from_utf8(body).map_err(|e| FetchError::Body(e.to_string()))
    }
}
