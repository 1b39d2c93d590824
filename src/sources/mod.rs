//! Playlist source handling
//!
//! Obtaining raw playlist text (URL, uploaded buffer, or local file) and
//! parsing it into channel records. Parsing is pure and tolerant: malformed
//! entries are dropped, never raised as errors.

pub mod fetcher;
pub mod m3u;

pub use fetcher::PlaylistFetcher;
