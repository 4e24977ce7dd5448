//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::persistence::repository::EntryRepository;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Entry repository over the SQLite pool.
    pub entries: EntryRepository,
    /// Immutable service configuration (credentials live here).
    pub config: Arc<AppConfig>,
}
