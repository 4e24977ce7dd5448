//! Data Transfer Objects for request/response serialization.
//!
//! Page DTOs are the structured payloads a front-end renders; form DTOs
//! carry submitted fields as optionals so handlers can reject missing
//! fields with 400 instead of an extractor rejection.

pub mod entry_dto;
pub mod form_dto;

pub use entry_dto::*;
pub use form_dto::*;
