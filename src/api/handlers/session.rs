//! Login and logout handlers.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use tower_sessions::Session;

use crate::api::dto::{LoginForm, LoginPage, require_field};
use crate::app_state::AppState;
use crate::auth;
use crate::error::BlogError;

/// `GET /login` — The login page payload, with no error set.
pub async fn login_form() -> Json<LoginPage> {
    Json(LoginPage { error: None })
}

/// `POST /login` — Validate credentials against the configured pair.
///
/// On success the session is marked authenticated and the client is
/// redirected to the list. On failure the login page is returned with the
/// specific rejection reason inline; the error is recovered locally and
/// never propagates.
///
/// # Errors
///
/// Returns [`BlogError::InvalidRequest`] for missing form fields.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, BlogError> {
    let username = require_field(form.username, "username")?;
    let password = require_field(form.password, "password")?;

    match auth::verify_credentials(&state.config, &username, &password) {
        Ok(()) => {
            auth::log_in(&session).await?;
            auth::set_notice(&session, "You were logged in").await?;
            tracing::info!(%username, "login succeeded");
            Ok(Redirect::to("/").into_response())
        }
        Err(reason) => {
            tracing::warn!(%username, %reason, "login rejected");
            Ok(Json(LoginPage {
                error: Some(reason.to_string()),
            })
            .into_response())
        }
    }
}

/// `GET /logout` — Drop the authentication flag and redirect to the list.
///
/// # Errors
///
/// Returns [`BlogError::Session`] on a session store failure.
pub async fn logout(session: Session) -> Result<Redirect, BlogError> {
    auth::log_out(&session).await?;
    auth::set_notice(&session, "You were logged out").await?;
    Ok(Redirect::to("/"))
}

/// Session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}
