//! Application configuration
//!
//! Configuration is an explicit struct handed to the components that need it,
//! loaded once from a TOML file at startup (with CLI overrides applied in
//! `main`). There is no process-wide mutable settings object.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub ingestion: IngestionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Total HTTP timeout for one playlist fetch, humantime format (e.g. "30s")
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_fetch_timeout() -> String {
    DEFAULT_FETCH_TIMEOUT.to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: None,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: default_fetch_timeout(),
        }
    }
}

impl IngestionConfig {
    /// Parse the configured fetch timeout
    pub fn fetch_timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.fetch_timeout).map_err(|e| {
            anyhow::anyhow!(
                "Invalid ingestion.fetch_timeout '{}': {e}",
                self.fetch_timeout
            )
        })
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_file(&config_file)
    }

    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.web.port, DEFAULT_PORT);
        assert_eq!(parsed.database.url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_default_fetch_timeout_parses() {
        let config = IngestionConfig::default();
        assert_eq!(config.fetch_timeout().unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[web]\nport = 9000\n").unwrap();
        assert_eq!(parsed.web.port, 9000);
        assert_eq!(parsed.web.host, DEFAULT_HOST);
        assert_eq!(parsed.ingestion.fetch_timeout, DEFAULT_FETCH_TIMEOUT);
    }
}
