//! Request DTOs for the note service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use uuid::Uuid;

use crate::error::{NoteError, Result};
use crate::models::Note;
use crate::seed::{DEFAULT_SEED_DESCRIPTION, DEFAULT_SEED_IDENTITY};

/// Request body for the seed operation (POST /generateData)
///
/// Both fields are optional; missing fields fall back to the fixed seed
/// payload, and an empty body seeds the fixed note unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeedRequest {
    /// Identity to seed
    #[serde(default)]
    pub identity: Option<Uuid>,
    /// Description to seed
    #[serde(default)]
    pub description: Option<String>,
}

impl SeedRequest {
    /// Parses a raw request body, treating an empty body as the default request.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| NoteError::InvalidRequest(e.to_string()))
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match &self.description {
            Some(desc) if desc.trim().is_empty() => {
                Some("Description cannot be empty".to_string())
            }
            _ => None,
        }
    }

    /// Resolves the note to seed, applying the fixed defaults.
    pub fn into_note(self) -> Note {
        Note::new(
            self.identity.unwrap_or(DEFAULT_SEED_IDENTITY),
            self.description
                .unwrap_or_else(|| DEFAULT_SEED_DESCRIPTION.to_string()),
        )
    }
}
