//! SeaORM-based database implementation
//!
//! This module provides database-agnostic access using SeaORM with support
//! for SQLite (including on-disk auto-creation) and PostgreSQL.

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database as SeaOrmDatabase, DatabaseBackend, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

pub mod migrations;
pub mod repositories;

/// Database connection manager
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
    backend: DatabaseBackend,
}

impl Database {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend = Self::detect_backend(&config.url)?;

        info!("Connecting to {} database", backend_name(backend));

        // For SQLite, modify the URL to enable auto-creation if needed
        let connection_url = match backend {
            DatabaseBackend::Sqlite => Self::ensure_sqlite_auto_creation(&config.url)?,
            _ => config.url.clone(),
        };

        let mut connect_options = ConnectOptions::new(&connection_url);
        connect_options
            .max_connections(config.max_connections.unwrap_or(10))
            .min_connections(1)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Duration::from_secs(600))
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        let connection = SeaOrmDatabase::connect(connect_options)
            .await
            .with_context(|| format!("Failed to connect to database at '{}'", config.url))?;

        debug!("Database connection established successfully");

        Ok(Self {
            connection: Arc::new(connection),
            backend,
        })
    }

    /// Shared connection handle for repositories
    pub fn connection(&self) -> &Arc<DatabaseConnection> {
        &self.connection
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Apply any pending migrations
    pub async fn run_migrations(&self) -> Result<()> {
        use sea_orm_migration::MigratorTrait;

        info!("Running database migrations");
        migrations::Migrator::up(&*self.connection, None)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    /// Check database connectivity
    pub async fn ping(&self) -> Result<()> {
        self.connection.ping().await?;
        Ok(())
    }

    /// Detect the database backend from the URL
    fn detect_backend(url: &str) -> Result<DatabaseBackend> {
        if url.starts_with("sqlite:") {
            Ok(DatabaseBackend::Sqlite)
        } else if url.starts_with("postgres:") || url.starts_with("postgresql:") {
            Ok(DatabaseBackend::Postgres)
        } else {
            anyhow::bail!("Unsupported database URL format: {}", url);
        }
    }

    /// Ensure a SQLite URL includes auto-creation mode if needed
    fn ensure_sqlite_auto_creation(url: &str) -> Result<String> {
        // Fast path: if URL already has a mode parameter or is in-memory, use as-is
        if url.contains("mode=") || url.contains(":memory:") {
            return Ok(url.to_string());
        }

        let file_path = if let Some(path) = url.strip_prefix("sqlite://") {
            path
        } else if let Some(path) = url.strip_prefix("sqlite:") {
            path
        } else {
            anyhow::bail!("Invalid SQLite URL format: {}", url);
        };

        let path = std::path::Path::new(file_path);
        if path.exists() {
            return Ok(url.to_string());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "Failed to create directory for SQLite database: {}",
                    parent.display()
                )
            })?;
            info!("Created directory for SQLite database: {}", parent.display());
        }

        // Add mode=rwc to enable auto-creation
        let auto_create_url = if url.contains('?') {
            format!("{url}&mode=rwc")
        } else {
            format!("{url}?mode=rwc")
        };

        info!("Modified SQLite URL to enable auto-creation: {auto_create_url}");
        Ok(auto_create_url)
    }
}

fn backend_name(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Sqlite => "SQLite",
        DatabaseBackend::Postgres => "PostgreSQL",
        DatabaseBackend::MySql => "MySQL",
    }
}
