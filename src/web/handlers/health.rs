//! Health check HTTP handlers

use axum::{extract::State, response::Response};
use serde::Serialize;

use crate::web::{AppState, responses::ok};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// Health check endpoint
///
/// Returns basic application health including database connectivity
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = state.database.ping().await.is_ok();

    let response = HealthResponse {
        status: if database_ok { "healthy" } else { "degraded" }.to_string(),
        database: if database_ok {
            "connected"
        } else {
            "unavailable"
        }
        .to_string(),
    };

    ok(response)
}
