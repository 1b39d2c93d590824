//! Web layer module
//!
//! HTTP interface for the playlist ingestion service: thin axum handlers
//! over the service layer, with a standardized response envelope and
//! consistent error mapping.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Config, database::Database, services::PlaylistImportService};

pub mod handlers;
pub mod responses;

pub use responses::{ApiResponse, handle_error, handle_result};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub import_service: Arc<PlaylistImportService>,
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(
        config: &Config,
        database: Database,
        import_service: Arc<PlaylistImportService>,
    ) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid listen address {}:{}",
                    config.web.host, config.web.port
                )
            })?;

        let app = create_router(AppState {
            database,
            import_service,
        });

        Ok(Self { app, addr })
    }

    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Listening on http://{}", self.addr);
        axum::serve(listener, self.app).await?;
        Ok(())
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/v1/playlists/import/url",
            post(handlers::playlists::import_from_url),
        )
        .route(
            "/api/v1/playlists/import/file",
            post(handlers::playlists::import_from_file),
        )
        .route(
            "/api/v1/playlists/parse/preview",
            get(handlers::playlists::preview_playlist),
        )
        .route("/api/v1/channels", get(handlers::channels::list_channels))
        .route(
            "/api/v1/channels/{id}",
            get(handlers::channels::get_channel),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
