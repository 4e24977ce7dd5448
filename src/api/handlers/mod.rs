//! HTTP endpoint handlers organized by concern.

pub mod entries;
pub mod session;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all application routes at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(entries::routes())
        .merge(session::routes())
        .merge(system::routes())
}
