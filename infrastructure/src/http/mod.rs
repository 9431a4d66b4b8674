//! HTTP plumbing shared by the catalog fetcher and the Web API transport.

mod catalog_fetcher;

pub use catalog_fetcher::HttpCatalogFetcher;

use std::time::Duration;

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("orgsettings/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
