pub mod playlist_import;

pub use playlist_import::{ImportSummary, PlaylistImportService, PlaylistPreview};
