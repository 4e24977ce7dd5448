//! Response DTOs: entries and the page payloads built from them.

use serde::{Deserialize, Serialize};

use crate::persistence::models::Entry;

/// A blog entry as serialized in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDto {
    /// Store-assigned id.
    pub id: i64,
    /// Entry title.
    pub title: String,
    /// Entry category.
    pub category: String,
    /// Entry body.
    pub text: String,
}

impl From<Entry> for EntryDto {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            category: entry.category,
            text: entry.text,
        }
    }
}

/// Payload of the list page (`GET /`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPage {
    /// Entries, newest first, optionally filtered by category.
    pub entries: Vec<EntryDto>,
    /// Distinct categories for navigation, ascending.
    pub categories: Vec<String>,
    /// One-shot notice from the previous mutation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Payload of the edit page (`GET /editpost/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPage {
    /// The entry being edited.
    pub entry: EntryDto,
}

/// Payload of the login page (`GET /login`, and `POST /login` on failure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPage {
    /// Inline error for a rejected login attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
