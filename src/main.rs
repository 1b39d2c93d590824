use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ladybug_ingest::{
    config::Config,
    database::{Database, repositories::ChannelSeaOrmRepository},
    services::PlaylistImportService,
    sources::PlaylistFetcher,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "ladybug-ingest")]
#[command(version)]
#[command(about = "M3U playlist ingestion and channel import service")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Database URL (overrides config file)
    #[arg(short = 'd', long, value_name = "URL")]
    database_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    /// Import a local playlist file at startup, then serve
    #[arg(long, value_name = "PATH")]
    import: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with the specified level; RUST_LOG wins if set
    let log_filter = format!("ladybug_ingest={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting playlist ingestion service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration and apply CLI overrides
    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database.url = database_url;
    }

    let database = Database::new(&config.database).await?;
    database.run_migrations().await?;

    let fetch_timeout = config.ingestion.fetch_timeout()?;
    let repository = ChannelSeaOrmRepository::new(database.connection().clone());
    let import_service = Arc::new(PlaylistImportService::new(
        PlaylistFetcher::new(fetch_timeout),
        repository,
    ));

    if let Some(path) = &cli.import {
        let summary = import_service
            .import_from_file(path)
            .await
            .with_context(|| format!("Startup import of '{}' failed", path.display()))?;
        info!(
            "Startup import: {} of {} channels imported from {}",
            summary.imported,
            summary.total_parsed,
            path.display()
        );
    }

    let server = WebServer::new(&config, database, import_service)?;
    server.serve().await
}
