//! HTTP API layer: route handlers, DTOs, and application assembly.
//!
//! All endpoints are mounted at the root level (the blog owns the whole
//! path space: `/`, `/add`, `/delete`, `/editpost/{id}`, `/login`,
//! `/logout`, plus `/health`).

pub mod dto;
pub mod handlers;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::app_state::AppState;

/// Builds the complete application: routes, session layer, request
/// tracing, and CORS.
///
/// Sessions use an in-memory store; the cookie carries only the session
/// id, so no signing key is involved.
pub fn build_app(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        .merge(handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(session_layer)
        .with_state(state)
}
