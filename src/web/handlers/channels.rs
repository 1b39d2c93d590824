//! Channel API handlers
//!
//! Read-only endpoints for browsing the persisted channel set.

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::database::repositories::ChannelSeaOrmRepository;
use crate::errors::{AppError, AppResult};
use crate::models::Channel;
use crate::web::{AppState, responses::handle_result};

#[derive(Debug, Deserialize)]
pub struct ChannelsQuery {
    /// Filter by exact category (case-insensitive)
    pub category: Option<String>,
    /// Search term for channel name
    pub search: Option<String>,
}

/// List persisted channels with optional filtering
pub async fn list_channels(
    State(state): State<AppState>,
    Query(params): Query<ChannelsQuery>,
) -> Response {
    handle_result(list_channels_inner(state, params).await)
}

async fn list_channels_inner(
    state: AppState,
    params: ChannelsQuery,
) -> AppResult<Vec<Channel>> {
    let repository = ChannelSeaOrmRepository::new(state.database.connection().clone());
    let mut channels = repository.find_all().await?;

    if let Some(category) = &params.category
        && !category.trim().is_empty()
    {
        channels.retain(|ch| ch.category.eq_ignore_ascii_case(category.trim()));
    }

    if let Some(search) = &params.search
        && !search.trim().is_empty()
    {
        let search_lower = search.trim().to_lowercase();
        channels.retain(|ch| ch.name.to_lowercase().contains(&search_lower));
    }

    Ok(channels)
}

/// Get a single channel by id
pub async fn get_channel(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    handle_result(get_channel_inner(state, id).await)
}

async fn get_channel_inner(state: AppState, id: String) -> AppResult<Channel> {
    let repository = ChannelSeaOrmRepository::new(state.database.connection().clone());
    repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("channel", id))
}
