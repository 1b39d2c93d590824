//! HTTP API integration tests
//!
//! Runs the full router against an in-memory SQLite database, with a
//! throwaway local listener standing in for a remote playlist host.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};

use ladybug_ingest::config::DatabaseConfig;
use ladybug_ingest::database::Database;
use ladybug_ingest::database::repositories::ChannelSeaOrmRepository;
use ladybug_ingest::services::PlaylistImportService;
use ladybug_ingest::sources::PlaylistFetcher;
use ladybug_ingest::web::{AppState, create_router};

const SAMPLE_PLAYLIST: &str = "#EXTM3U\n\
#EXTINF:-1 tvg-id=\"news1\" group-title=\"News\",News Channel\n\
http://example.com/news.m3u8\n\
#EXTINF:-1 tvg-id=\"sport1\" group-title=\"Sports\",Sports Channel\n\
http://example.com/sports.m3u8\n";

async fn setup_server() -> (TestServer, ChannelSeaOrmRepository) {
    let db_url = format!(
        "sqlite:file:{}?mode=memory&cache=shared",
        uuid::Uuid::new_v4()
    );
    let database = Database::new(&DatabaseConfig {
        url: db_url,
        max_connections: Some(5),
    })
    .await
    .expect("database");
    database.run_migrations().await.expect("migrations");

    let repository = ChannelSeaOrmRepository::new(database.connection().clone());
    let import_service = Arc::new(PlaylistImportService::new(
        PlaylistFetcher::new(Duration::from_secs(5)),
        repository.clone(),
    ));

    let app = create_router(AppState {
        database,
        import_service,
    });

    (TestServer::new(app).expect("test server"), repository)
}

/// Serve a fixed playlist body on a random local port
async fn spawn_playlist_host(body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = axum::Router::new().route(
        "/playlist.m3u8",
        axum::routing::get(move || async move { body }),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}/playlist.m3u8")
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _repository) = setup_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_import_from_url_endpoint() {
    let (server, repository) = setup_server().await;
    let playlist_url = spawn_playlist_host(SAMPLE_PLAYLIST).await;

    let response = server
        .post("/api/v1/playlists/import/url")
        .json(&serde_json::json!({ "url": playlist_url }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["imported"], 2);
    assert_eq!(body["data"]["total_parsed"], 2);
    assert_eq!(
        body["data"]["message"],
        "Successfully imported 2 channels"
    );

    assert_eq!(repository.count().await.expect("count"), 2);
}

#[tokio::test]
async fn test_import_rejects_malformed_url() {
    let (server, _repository) = setup_server().await;

    let response = server
        .post("/api/v1/playlists/import/url")
        .json(&serde_json::json!({ "url": "not a url" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Invalid playlist URL"));
}

#[tokio::test]
async fn test_import_surfaces_fetch_failure_as_client_error() {
    let (server, repository) = setup_server().await;
    let playlist_url = spawn_playlist_host(SAMPLE_PLAYLIST).await;
    let missing_url = playlist_url.replace("playlist.m3u8", "missing.m3u8");

    let response = server
        .post("/api/v1/playlists/import/url")
        .json(&serde_json::json!({ "url": missing_url }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("404"));

    assert_eq!(repository.count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_import_from_uploaded_file() {
    let (server, repository) = setup_server().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(SAMPLE_PLAYLIST.as_bytes().to_vec()).file_name("channels.m3u8"),
    );

    let response = server
        .post("/api/v1/playlists/import/file")
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["imported"], 2);
    assert_eq!(repository.count().await.expect("count"), 2);
}

#[tokio::test]
async fn test_upload_rejects_wrong_extension() {
    let (server, repository) = setup_server().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(SAMPLE_PLAYLIST.as_bytes().to_vec()).file_name("channels.txt"),
    );

    let response = server
        .post("/api/v1/playlists/import/file")
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Only .m3u or .m3u8 files allowed")
    );
    assert_eq!(repository.count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_preview_endpoint_does_not_import() {
    let (server, repository) = setup_server().await;
    let playlist_url = spawn_playlist_host(SAMPLE_PLAYLIST).await;

    let response = server
        .get("/api/v1/playlists/parse/preview")
        .add_query_param("url", playlist_url)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["total_channels"], 2);
    assert_eq!(body["data"]["channels"].as_array().unwrap().len(), 2);
    let categories: Vec<&str> = body["data"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["News", "Sports"]);

    // Preview leaves the store untouched
    assert_eq!(repository.count().await.expect("count"), 0);
}

#[tokio::test]
async fn test_channel_listing_and_lookup() {
    let (server, _repository) = setup_server().await;
    let playlist_url = spawn_playlist_host(SAMPLE_PLAYLIST).await;

    server
        .post("/api/v1/playlists/import/url")
        .json(&serde_json::json!({ "url": playlist_url }))
        .await;

    let response = server.get("/api/v1/channels").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let filtered = server
        .get("/api/v1/channels")
        .add_query_param("category", "news")
        .await;
    let body: serde_json::Value = filtered.json();
    let channels = body["data"].as_array().unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0]["name"], "News Channel");

    let single = server.get("/api/v1/channels/news1").await;
    assert_eq!(single.status_code(), StatusCode::OK);
    let body: serde_json::Value = single.json();
    assert_eq!(body["data"]["stream_url"], "http://example.com/news.m3u8");

    let missing = server.get("/api/v1/channels/nope").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}
