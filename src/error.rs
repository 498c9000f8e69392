//! Error types for the note service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreKind;

// == Note Error Enum ==
/// Unified error type for the note service.
///
/// A lookup miss is not represented here; handlers return `None` instead.
#[derive(Error, Debug)]
pub enum NoteError {
    /// The store's connection string was not configured
    #[error("{0} store is not configured")]
    StoreUnavailable(StoreKind),

    /// Network or server-side failure talking to a store
    #[error("{kind} store error: {message}")]
    Store { kind: StoreKind, message: String },

    /// A stored record could not be decoded
    #[error("Malformed {kind} record: {message}")]
    Corrupt { kind: StoreKind, message: String },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl NoteError {
    /// Wraps a backend error for the given store.
    pub fn store(kind: StoreKind, err: impl std::fmt::Display) -> Self {
        NoteError::Store {
            kind,
            message: err.to_string(),
        }
    }

    /// Wraps a decoding failure for the given store.
    pub fn corrupt(kind: StoreKind, err: impl std::fmt::Display) -> Self {
        NoteError::Corrupt {
            kind,
            message: err.to_string(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        let status = match &self {
            NoteError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            NoteError::StoreUnavailable(_)
            | NoteError::Store { .. }
            | NoteError::Corrupt { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the note service.
pub type Result<T> = std::result::Result<T, NoteError>;
