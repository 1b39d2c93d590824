//! HTTP client for fetching playlist content
//!
//! A thin wrapper around `reqwest` with a bounded total request timeout.
//! Fetches are single attempts; failures surface immediately as `FetchError`
//! and are never retried.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::errors::{FetchError, FetchResult};

/// HTTP client with a bounded total request timeout
pub struct StandardHttpClient {
    client: Client,
}

impl StandardHttpClient {
    /// Create a new HTTP client with the default 30 second timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP client with a custom total request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch a URL and return its body as UTF-8 text
    pub async fn fetch_text(&self, url: &str) -> FetchResult<String> {
        debug!("Fetching text content from: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let content = String::from_utf8(bytes.to_vec())?;

        debug!("Fetched {} characters of text content", content.len());
        Ok(content)
    }
}

impl Default for StandardHttpClient {
    fn default() -> Self {
        Self::new()
    }
}
