//! Entry handlers: list, add, delete, edit.

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use tower_sessions::Session;

use crate::api::dto::{
    DeleteForm, EditForm, EditPage, EntryDto, ListPage, ListQuery, NewEntryForm, require_field,
};
use crate::app_state::AppState;
use crate::auth;
use crate::error::BlogError;

/// `GET /` — List entries, optionally filtered by category.
///
/// Also returns the distinct categories for navigation and pops the
/// pending flash notice, if any. No authentication required.
///
/// # Errors
///
/// Returns [`BlogError`] on database or session failures.
pub async fn show_entries(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListPage>, BlogError> {
    let entries = match params.category.as_deref() {
        Some(category) => state.entries.list_by_category(category).await?,
        None => state.entries.list_all().await?,
    };
    let categories = state.entries.list_distinct_categories().await?;
    let notice = auth::take_notice(&session).await?;

    Ok(Json(ListPage {
        entries: entries.into_iter().map(EntryDto::from).collect(),
        categories,
        notice,
    }))
}

/// `POST /add` — Create a new entry. Requires authentication.
///
/// All three form fields are required; a missing one is rejected with 400
/// before anything is written.
///
/// # Errors
///
/// Returns [`BlogError::Unauthorized`] for unauthenticated sessions,
/// [`BlogError::InvalidRequest`] for missing fields.
pub async fn add_entry(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewEntryForm>,
) -> Result<Redirect, BlogError> {
    auth::require_authenticated(&session).await?;

    let title = require_field(form.title, "title")?;
    let category = require_field(form.category, "category")?;
    let text = require_field(form.text, "text")?;

    state.entries.insert(&title, &category, &text).await?;
    tracing::info!(%title, %category, "entry added");

    auth::set_notice(&session, "New entry was successfully posted").await?;
    Ok(Redirect::to("/"))
}

/// `POST /delete` — Delete an entry by id. Requires authentication.
///
/// Deleting a nonexistent id is a no-op and still redirects.
///
/// # Errors
///
/// Returns [`BlogError::Unauthorized`] for unauthenticated sessions,
/// [`BlogError::InvalidRequest`] for a missing or non-integer id.
pub async fn delete_entry(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, BlogError> {
    auth::require_authenticated(&session).await?;

    let id: i64 = require_field(form.id, "id")?
        .parse()
        .map_err(|_| BlogError::InvalidRequest("id must be an integer".to_string()))?;

    state.entries.delete_by_id(id).await?;
    tracing::info!(id, "entry deleted");

    auth::set_notice(&session, "Entry deleted").await?;
    Ok(Redirect::to("/"))
}

/// `GET /editpost/{id}` — Fetch an entry for editing. Requires
/// authentication.
///
/// # Errors
///
/// Returns [`BlogError::EntryNotFound`] if the id does not exist.
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Json<EditPage>, BlogError> {
    auth::require_authenticated(&session).await?;

    let entry = state
        .entries
        .fetch_by_id(id)
        .await?
        .ok_or(BlogError::EntryNotFound(id))?;

    Ok(Json(EditPage {
        entry: EntryDto::from(entry),
    }))
}

/// `POST /editpost/{id}` — Update an entry's title and body. Requires
/// authentication.
///
/// The category and id are immutable through this endpoint.
///
/// # Errors
///
/// Returns [`BlogError::EntryNotFound`] if the id does not exist,
/// [`BlogError::InvalidRequest`] for missing fields.
pub async fn edit_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, BlogError> {
    auth::require_authenticated(&session).await?;

    let title = require_field(form.title, "title")?;
    let content = require_field(form.content, "content")?;

    state
        .entries
        .fetch_by_id(id)
        .await?
        .ok_or(BlogError::EntryNotFound(id))?;

    state.entries.update(id, &title, &content).await?;
    tracing::info!(id, "entry updated");

    Ok(Redirect::to("/"))
}

/// Entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_entries))
        .route("/add", post(add_entry))
        .route("/delete", post(delete_entry))
        .route("/editpost/{id}", get(edit_form).post(edit_entry))
}
