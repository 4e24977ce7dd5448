//! Database models for blog entries.

use serde::{Deserialize, Serialize};

/// A blog entry row from the `entries` table.
///
/// The id is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Entry {
    /// Auto-increment row ID.
    pub id: i64,
    /// Entry title.
    pub title: String,
    /// Category used for list filtering and navigation.
    pub category: String,
    /// Entry body.
    pub text: String,
}
