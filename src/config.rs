// ============================================================================
// Configuration
// ============================================================================
//
// Environment-driven configuration for the wall server and the feed client.
// Loads `.env` when present; every variable has a default suitable for local
// development.
//
// ============================================================================

use anyhow::{Context, Result};

// Default endpoints
const DEFAULT_DATABASE_URL: &str = "sqlite://wall.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_WALL_URL: &str = "http://127.0.0.1:8080";

// Default log filter
const DEFAULT_RUST_LOG: &str = "info";

// Default connection pool settings
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_DB_IDLE_TIMEOUT_SECS: u64 = 600;

// Default polling interval (in milliseconds)
const DEFAULT_FEED_POLL_INTERVAL_MS: u64 = 2000;

/// Database connection pool configuration
#[derive(Clone, Debug)]
pub struct DbConfig {
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Timeout for acquiring a connection from the pool (seconds)
    pub acquire_timeout_secs: u64,
    /// Timeout for idle connections before they are closed (seconds)
    pub idle_timeout_secs: u64,
}

/// Feed client configuration
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Base URL of the wall server the feed talks to
    pub server_url: String,
    /// Interval between full-feed refreshes (milliseconds)
    pub poll_interval_ms: u64,
}

/// Main configuration structure for the wall server and feed client
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub rust_log: String,

    // Sub-configurations
    pub db: DbConfig,
    pub feed: FeedConfig,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            rust_log: env_or("RUST_LOG", DEFAULT_RUST_LOG),
            db: DbConfig {
                max_connections: env_parsed("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
                acquire_timeout_secs: env_parsed(
                    "DB_ACQUIRE_TIMEOUT_SECS",
                    DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
                )?,
                idle_timeout_secs: env_parsed(
                    "DB_IDLE_TIMEOUT_SECS",
                    DEFAULT_DB_IDLE_TIMEOUT_SECS,
                )?,
            },
            feed: FeedConfig {
                server_url: env_or("WALL_URL", DEFAULT_WALL_URL),
                poll_interval_ms: env_parsed(
                    "FEED_POLL_INTERVAL_MS",
                    DEFAULT_FEED_POLL_INTERVAL_MS,
                )?,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("Invalid value for {}", key)),
        Err(_) => Ok(default),
    }
}
