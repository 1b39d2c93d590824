//! Domain models shared across the application
//!
//! These are the plain data types the parser, importer, and web layer
//! exchange. The persisted representation lives in `crate::entities`;
//! repositories convert between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted channel
///
/// `stream_url` is the identity key for deduplication: no two persisted
/// channels ever share the same stream URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Primary key; the playlist's `tvg-id` when present, otherwise a
    /// synthetic id derived from the stream URL
    pub id: String,
    pub name: String,
    pub category: String,
    pub logo: Option<String>,
    pub stream_url: String,
    /// External EPG identifier, same value as the source `tvg-id`
    pub epg_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One parsed playlist entry, produced by the scanner
///
/// Created from exactly two consecutive playlist lines (an `#EXTINF`
/// directive and the stream URL that follows it) and discarded after import
/// or preview. All metadata fields are independently optional; absent means
/// the attribute never appeared, which downstream defaulting distinguishes
/// from an explicitly empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub stream_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_logo: Option<String>,
    /// `group-title` attribute; becomes the channel category on import
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_title: Option<String>,
    /// Free text after the last comma of the directive line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
