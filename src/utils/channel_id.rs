//! Deterministic synthetic channel ids
//!
//! Playlist entries without a usable `tvg-id` still need a primary key. The
//! id is derived from a content hash of the stream URL, so the same entry
//! always maps to the same id across imports, and distinct stream URLs never
//! collide within one import batch.

use sha2::{Digest, Sha256};

const SYNTHETIC_ID_PREFIX: &str = "ch-";

/// Derive a stable synthetic channel id from a stream URL
pub fn synthetic_channel_id(stream_url: &str) -> String {
    let digest = Sha256::digest(stream_url.as_bytes());
    format!("{SYNTHETIC_ID_PREFIX}{}", hex::encode(&digest[..8]))
}
