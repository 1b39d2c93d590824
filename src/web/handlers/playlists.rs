//! Playlist import API handlers
//!
//! Endpoints for importing channels from a playlist URL or an uploaded
//! playlist file, and for previewing a playlist without importing it.

use axum::{
    extract::{Multipart, Query, State},
    response::Response,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{AppError, AppResult};
use crate::services::{ImportSummary, PlaylistPreview};
use crate::web::{AppState, responses::handle_result};

/// Accepted upload extensions; anything else is rejected before parsing
const ALLOWED_EXTENSIONS: [&str; 2] = [".m3u", ".m3u8"];

#[derive(Debug, Deserialize)]
pub struct ImportUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
    pub total_parsed: usize,
    pub imported: usize,
}

impl From<ImportSummary> for ImportResponse {
    fn from(summary: ImportSummary) -> Self {
        Self {
            message: format!("Successfully imported {} channels", summary.imported),
            total_parsed: summary.total_parsed,
            imported: summary.imported,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub url: String,
}

/// Import channels from a playlist URL
pub async fn import_from_url(
    State(state): State<AppState>,
    axum::Json(request): axum::Json<ImportUrlRequest>,
) -> Response {
    handle_result(import_url_inner(state, request).await)
}

async fn import_url_inner(
    state: AppState,
    request: ImportUrlRequest,
) -> AppResult<ImportResponse> {
    let url = parse_playlist_url(&request.url)?;
    let summary = state.import_service.import_from_url(url.as_str()).await?;
    Ok(summary.into())
}

/// Import channels from an uploaded playlist file
pub async fn import_from_file(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_result(import_file_inner(state, multipart).await)
}

async fn import_file_inner(
    state: AppState,
    mut multipart: Multipart,
) -> AppResult<ImportResponse> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .ok_or_else(|| AppError::validation("Missing upload filename"))?
                .to_string();

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

            upload = Some((file_name, data.to_vec()));
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::validation("Missing 'file' field in upload"))?;

    if !ALLOWED_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(ext))
    {
        return Err(AppError::validation(
            "Invalid file type. Only .m3u or .m3u8 files allowed",
        ));
    }

    let summary = state.import_service.import_upload(data).await?;
    Ok(summary.into())
}

/// Preview channels in a playlist without importing them
pub async fn preview_playlist(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Response {
    handle_result(preview_inner(state, params).await)
}

async fn preview_inner(state: AppState, params: PreviewParams) -> AppResult<PlaylistPreview> {
    let url = parse_playlist_url(&params.url)?;
    state.import_service.preview_from_url(url.as_str()).await
}

fn parse_playlist_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::validation(format!("Invalid playlist URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::validation(format!(
            "Unsupported URL scheme '{}': playlist URLs must use http or https",
            url.scheme()
        )));
    }

    Ok(url)
}
