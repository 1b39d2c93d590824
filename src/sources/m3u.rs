//! M3U/M3U8 playlist parsing
//!
//! Walks playlist text line by line, pairing each `#EXTINF` directive with
//! the stream URL on the following line and extracting the quoted metadata
//! attributes from the directive.
//!
//! The parser is deliberately tolerant: playlists in the wild are
//! inconsistently authored, so unusable directive/URL pairs are dropped and
//! the scan continues. The worst case is an empty result, never an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::PlaylistEntry;

const EXTINF_PREFIX: &str = "#EXTINF";

static TVG_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-id="([^"]*)""#).expect("valid tvg-id pattern"));
static TVG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-name="([^"]*)""#).expect("valid tvg-name pattern"));
static TVG_LOGO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-logo="([^"]*)""#).expect("valid tvg-logo pattern"));
static GROUP_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"group-title="([^"]*)""#).expect("valid group-title pattern"));

/// Metadata extracted from a single `#EXTINF` directive line
///
/// Every field is independently optional. An attribute that never appeared is
/// `None`, which is distinct from one that appeared with an empty value, so
/// downstream defaulting can tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtinfMetadata {
    pub tvg_id: Option<String>,
    pub tvg_name: Option<String>,
    pub tvg_logo: Option<String>,
    pub group_title: Option<String>,
    pub display_name: Option<String>,
}

/// Parse playlist content into channel entries
///
/// Scans trimmed lines with a cursor: a line starting with `#EXTINF` is
/// paired with the following line when that line is non-empty and not itself
/// a comment or directive; otherwise the directive is dropped. The cursor
/// advances past the pair either way, so a malformed entry never poisons the
/// rest of the scan. Entries come out in input order.
pub fn parse_playlist(content: &str) -> Vec<PlaylistEntry> {
    let lines: Vec<&str> = content.trim().split('\n').map(str::trim).collect();
    let mut entries = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if line.starts_with(EXTINF_PREFIX) {
            match lines.get(i + 1) {
                Some(&next) if !next.is_empty() && !next.starts_with('#') => {
                    let metadata = parse_extinf_line(line);
                    entries.push(PlaylistEntry {
                        stream_url: next.to_string(),
                        tvg_id: metadata.tvg_id,
                        tvg_name: metadata.tvg_name,
                        tvg_logo: metadata.tvg_logo,
                        group_title: metadata.group_title,
                        display_name: metadata.display_name,
                    });
                }
                _ => {
                    debug!("Dropping directive without stream URL at line {}", i + 1);
                }
            }
            i += 2;
        } else {
            // Header, stray comment, blank line, or orphaned URL
            i += 1;
        }
    }

    debug!("Parsed {} entries from playlist content", entries.len());
    entries
}

/// Extract metadata from an `#EXTINF` directive line
///
/// The four quoted attributes may appear anywhere on the line, in any order.
/// The display name is the trimmed text after the *last* comma; quoted
/// attribute values may themselves contain commas, which is why the last one
/// is the anchor. A line without a comma (or with nothing after it) yields no
/// display name.
pub fn parse_extinf_line(line: &str) -> ExtinfMetadata {
    let display_name = line.rfind(',').and_then(|pos| {
        let name = line[pos + 1..].trim();
        (!name.is_empty()).then(|| name.to_string())
    });

    ExtinfMetadata {
        tvg_id: capture_attr(&TVG_ID_RE, line),
        tvg_name: capture_attr(&TVG_NAME_RE, line),
        tvg_logo: capture_attr(&TVG_LOGO_RE, line),
        group_title: capture_attr(&GROUP_TITLE_RE, line),
        display_name,
    }
}

fn capture_attr(re: &Regex, line: &str) -> Option<String> {
    re.captures(line).map(|caps| caps[1].to_string())
}
