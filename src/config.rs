//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), loaded once at startup into an
//! immutable [`AppConfig`].

use std::net::SocketAddr;

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`] and shared read-only
/// across all request handlers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string (e.g. `sqlite://inkpost.db`).
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Username the login endpoint accepts.
    pub username: String,

    /// Password the login endpoint accepts.
    pub password: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://inkpost.db".to_string());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);

        let username = std::env::var("USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = std::env::var("PASSWORD").unwrap_or_else(|_| "default".to_string());

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            username,
            password,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
