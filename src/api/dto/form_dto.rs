//! Request DTOs: submitted forms and query parameters.
//!
//! Form fields deserialize as `Option<String>` so that a missing field
//! surfaces as an explicit 400 from handler-side validation.

use serde::Deserialize;

use crate::error::BlogError;

/// Query parameters of the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to this category when present.
    pub category: Option<String>,
}

/// Form body of `POST /add`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntryForm {
    /// Entry title (required).
    pub title: Option<String>,
    /// Entry category (required).
    pub category: Option<String>,
    /// Entry body (required).
    pub text: Option<String>,
}

/// Form body of `POST /delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteForm {
    /// Id of the entry to delete (required, integer).
    pub id: Option<String>,
}

/// Form body of `POST /editpost/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EditForm {
    /// New entry title (required).
    pub title: Option<String>,
    /// New entry body (required).
    pub content: Option<String>,
}

/// Form body of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// Submitted username (required).
    pub username: Option<String>,
    /// Submitted password (required).
    pub password: Option<String>,
}

/// Unwraps a required form field, rejecting the request with 400 when it
/// is absent.
///
/// # Errors
///
/// Returns [`BlogError::InvalidRequest`] naming the missing field.
pub fn require_field(value: Option<String>, name: &str) -> Result<String, BlogError> {
    value.ok_or_else(|| BlogError::InvalidRequest(format!("missing form field: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_field_passes_through_present_values() {
        let result = require_field(Some("v".to_string()), "title");
        assert!(matches!(result, Ok(v) if v == "v"));
    }

    #[test]
    fn require_field_rejects_missing_values() {
        let result = require_field(None, "title");
        assert!(matches!(result, Err(BlogError::InvalidRequest(_))));
    }
}
