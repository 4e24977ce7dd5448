//! Persistence layer: SQLite entry storage.
//!
//! The connection pool is the storage accessor: pooled connections are
//! checked out lazily per query and returned by drop on every exit path,
//! so a handler can never leak a handle. The concrete implementation uses
//! `sqlx::SqlitePool` for async SQLite access.

pub mod models;
pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::AppConfig;
use crate::error::BlogError;

/// Bundled table definition, applied by [`init_db`].
const SCHEMA: &str = include_str!("../../schema.sql");

/// Opens a connection pool to the configured database location.
///
/// The database file is created if it does not exist yet; the schema is
/// only applied by the explicit [`init_db`] step.
///
/// # Errors
///
/// Returns [`BlogError::Database`] if the store is unreachable or the
/// connection string is invalid.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, BlogError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Initializes the database schema from the bundled `schema.sql`.
///
/// Destructive: drops and recreates the `entries` table. Run as the
/// explicit `initdb` command, never at ordinary startup.
///
/// # Errors
///
/// Returns [`BlogError::Database`] if the script fails to execute.
pub async fn init_db(pool: &SqlitePool) -> Result<(), BlogError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::info!("database schema initialized");
    Ok(())
}
