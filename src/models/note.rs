//! Note entity
//!
//! The record shape shared by both stores and the HTTP surface:
//! `{ "Identity": "<uuid>", "Description": "<text>" }`. Store-internal keys
//! never appear here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note, keyed by its caller-supplied `Identity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Note {
    /// Externally meaningful identifier, never generated by a store
    pub identity: Uuid,
    /// Free-text description
    pub description: String,
}

impl Note {
    /// Creates a new Note
    pub fn new(identity: Uuid, description: impl Into<String>) -> Self {
        Self {
            identity,
            description: description.into(),
        }
    }
}
