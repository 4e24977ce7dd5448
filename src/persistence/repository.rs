//! SQL operations over the `entries` table.

use sqlx::SqlitePool;

use super::models::Entry;
use crate::error::BlogError;

/// SQLite-backed entry repository using `sqlx::SqlitePool`.
///
/// Every statement is parameterized via binds; user input is never
/// interpolated into query text. Mutations autocommit per statement, so a
/// write is durable before the handler responds.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    pool: SqlitePool,
}

impl EntryRepository {
    /// Creates a new repository over the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns all entries, newest first (descending by id).
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Database`] on query failure.
    pub async fn list_all(&self) -> Result<Vec<Entry>, BlogError> {
        let entries = sqlx::query_as::<_, Entry>(
            "SELECT id, title, category, text FROM entries ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Returns entries in the given category, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Database`] on query failure.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Entry>, BlogError> {
        let entries = sqlx::query_as::<_, Entry>(
            "SELECT id, title, category, text FROM entries WHERE category = ? ORDER BY id DESC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Returns the distinct category values, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Database`] on query failure.
    pub async fn list_distinct_categories(&self) -> Result<Vec<String>, BlogError> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM entries ORDER BY category ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Inserts a new entry; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Database`] on query failure.
    pub async fn insert(&self, title: &str, category: &str, text: &str) -> Result<(), BlogError> {
        sqlx::query("INSERT INTO entries (title, category, text) VALUES (?, ?, ?)")
            .bind(title)
            .bind(category)
            .bind(text)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes the entry with the given id. No-op if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Database`] on query failure.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), BlogError> {
        sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Fetches a single entry by id, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Database`] on query failure.
    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<Entry>, BlogError> {
        let entry = sqlx::query_as::<_, Entry>(
            "SELECT id, title, category, text FROM entries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Updates the title and body of the entry with the given id.
    ///
    /// The category and id are immutable through this path.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Database`] on query failure.
    pub async fn update(&self, id: i64, title: &str, text: &str) -> Result<(), BlogError> {
        sqlx::query("UPDATE entries SET title = ?, text = ? WHERE id = ?")
            .bind(title)
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
