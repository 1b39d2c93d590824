//! Default configuration values

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./data/channels.db";
pub const DEFAULT_FETCH_TIMEOUT: &str = "30s";
