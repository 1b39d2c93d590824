//! Playlist import service
//!
//! Reconciles parsed playlist entries against the persisted channel set:
//! entries whose stream URL is already persisted (or already queued within
//! the same batch) are skipped, everything else becomes a new channel. The
//! batch is committed atomically, so a persistence failure leaves the store
//! untouched.
//!
//! Preview runs the same fetch and parse with no store interaction at all.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::database::repositories::ChannelSeaOrmRepository;
use crate::errors::AppResult;
use crate::models::{Channel, PlaylistEntry};
use crate::sources::{PlaylistFetcher, m3u};
use crate::utils::synthetic_channel_id;

/// Name given to channels whose directive line carried no display name
const DEFAULT_CHANNEL_NAME: &str = "Unknown";

/// Category given to channels whose directive line carried no group title
const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Maximum number of parsed entries returned by a preview
const PREVIEW_CHANNEL_LIMIT: usize = 20;

/// Outcome of one import call
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub total_parsed: usize,
}

/// Outcome of a preview call: parsed entries only, nothing persisted
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistPreview {
    pub total_channels: usize,
    pub channels: Vec<PlaylistEntry>,
    pub categories: Vec<String>,
}

/// Fetch, parse, and import playlists into the channel store
pub struct PlaylistImportService {
    fetcher: PlaylistFetcher,
    repository: ChannelSeaOrmRepository,
}

impl PlaylistImportService {
    pub fn new(fetcher: PlaylistFetcher, repository: ChannelSeaOrmRepository) -> Self {
        Self {
            fetcher,
            repository,
        }
    }

    /// Fetch a playlist from a URL and import its channels
    pub async fn import_from_url(&self, url: &str) -> AppResult<ImportSummary> {
        let content = self.fetcher.fetch_url(url).await?;
        self.import_content(&content).await
    }

    /// Read a local playlist file and import its channels
    pub async fn import_from_file(&self, path: &Path) -> AppResult<ImportSummary> {
        let content = self.fetcher.fetch_file(path).await?;
        self.import_content(&content).await
    }

    /// Decode an uploaded playlist and import its channels
    pub async fn import_upload(&self, bytes: Vec<u8>) -> AppResult<ImportSummary> {
        let content = PlaylistFetcher::decode_upload(bytes)?;
        self.import_content(&content).await
    }

    async fn import_content(&self, content: &str) -> AppResult<ImportSummary> {
        let entries = m3u::parse_playlist(content);
        self.import_entries(entries).await
    }

    /// Import parsed entries, skipping any stream URL that is already persisted
    ///
    /// Re-importing a fully imported playlist is a no-op with an imported
    /// count of 0.
    pub async fn import_entries(&self, entries: Vec<PlaylistEntry>) -> AppResult<ImportSummary> {
        let total_parsed = entries.len();
        let mut batch_urls: HashSet<&str> = HashSet::new();
        let mut new_channels: Vec<Channel> = Vec::new();

        for entry in &entries {
            if batch_urls.contains(entry.stream_url.as_str()) {
                debug!(
                    "Skipping duplicate stream URL within batch: {}",
                    entry.stream_url
                );
                continue;
            }

            if self
                .repository
                .find_by_stream_url(&entry.stream_url)
                .await?
                .is_some()
            {
                debug!(
                    "Skipping already imported stream URL: {}",
                    entry.stream_url
                );
                continue;
            }

            batch_urls.insert(entry.stream_url.as_str());
            new_channels.push(Self::build_channel(entry));
        }

        let imported = self.repository.insert_batch(&new_channels).await?;
        info!("Imported {imported} of {total_parsed} parsed channels");

        Ok(ImportSummary {
            imported,
            total_parsed,
        })
    }

    /// Fetch a playlist from a URL and preview it without importing
    pub async fn preview_from_url(&self, url: &str) -> AppResult<PlaylistPreview> {
        let content = self.fetcher.fetch_url(url).await?;
        Ok(Self::preview_content(&content))
    }

    /// Parse playlist content into a preview
    pub fn preview_content(content: &str) -> PlaylistPreview {
        let entries = m3u::parse_playlist(content);

        let categories: BTreeSet<String> = entries
            .iter()
            .map(|entry| {
                entry
                    .group_title
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
            })
            .collect();

        PlaylistPreview {
            total_channels: entries.len(),
            categories: categories.into_iter().collect(),
            channels: entries.into_iter().take(PREVIEW_CHANNEL_LIMIT).collect(),
        }
    }

    /// Build a new channel from a parsed entry, applying defaults
    fn build_channel(entry: &PlaylistEntry) -> Channel {
        let now = Utc::now();

        let id = match &entry.tvg_id {
            Some(tvg_id) if !tvg_id.is_empty() => tvg_id.clone(),
            _ => synthetic_channel_id(&entry.stream_url),
        };

        Channel {
            id,
            name: entry
                .display_name
                .clone()
                .unwrap_or_else(|| DEFAULT_CHANNEL_NAME.to_string()),
            category: entry
                .group_title
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            logo: entry.tvg_logo.clone(),
            stream_url: entry.stream_url.clone(),
            epg_id: entry.tvg_id.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_limits_channels_and_collects_categories() {
        let mut content = String::from("#EXTM3U\n");
        for i in 0..25 {
            content.push_str(&format!(
                "#EXTINF:-1 group-title=\"Group {}\",Channel {i}\nhttp://example.com/{i}.m3u8\n",
                i % 3
            ));
        }

        let preview = PlaylistImportService::preview_content(&content);
        assert_eq!(preview.total_channels, 25);
        assert_eq!(preview.channels.len(), 20);
        assert_eq!(
            preview.categories,
            vec!["Group 0", "Group 1", "Group 2"]
        );
    }

    #[test]
    fn test_preview_defaults_missing_category() {
        let content = "#EXTINF:-1,Bare\nhttp://example.com/bare.m3u8\n";
        let preview = PlaylistImportService::preview_content(content);
        assert_eq!(preview.categories, vec!["Uncategorized"]);
        // The raw entry itself stays undefaulted
        assert_eq!(preview.channels[0].group_title, None);
    }
}
