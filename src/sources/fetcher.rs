//! Playlist source fetcher
//!
//! Obtains raw playlist text from the three supported sources: a remote URL,
//! a local file path, or an uploaded byte buffer. Each fetch is one attempt
//! with no retry; the failure (and its underlying cause text) is surfaced to
//! the caller as a `FetchError`.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::errors::{FetchError, FetchResult};
use crate::utils::StandardHttpClient;

/// Fetches raw playlist text from URLs, files, and uploads
pub struct PlaylistFetcher {
    http_client: StandardHttpClient,
}

impl PlaylistFetcher {
    /// Create a fetcher with the given total HTTP request timeout
    pub fn new(fetch_timeout: Duration) -> Self {
        Self {
            http_client: StandardHttpClient::with_timeout(fetch_timeout),
        }
    }

    /// Fetch playlist text from a remote URL
    pub async fn fetch_url(&self, url: &str) -> FetchResult<String> {
        self.http_client.fetch_text(url).await
    }

    /// Read playlist text from a local file
    pub async fn fetch_file(&self, path: &Path) -> FetchResult<String> {
        debug!("Reading playlist file: {}", path.display());

        let bytes = tokio::fs::read(path).await.map_err(|source| FetchError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Ok(String::from_utf8(bytes)?)
    }

    /// Decode an uploaded byte buffer as playlist text
    pub fn decode_upload(bytes: Vec<u8>) -> FetchResult<String> {
        Ok(String::from_utf8(bytes)?)
    }
}

impl Default for PlaylistFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}
