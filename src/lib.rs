//! # inkpost
//!
//! A minimal single-user blog service over HTTP: list entries (optionally
//! filtered by category), add, delete, and edit entries, with a cookie
//! session gate protecting every write. Rendering is left to an external
//! front-end — handlers return structured page payloads as JSON.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── Handlers (api/)
//!     │
//!     ├── Session/Auth Gate (auth)
//!     │
//!     ├── EntryRepository (persistence/)
//!     │
//!     └── SQLite (sqlx pool)
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod persistence;
