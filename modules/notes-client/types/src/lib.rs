//! Shared types for the notes client and the notes REST API it consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes` and `PUT /notes/{id}`.
///
/// Built through [`NotePayload::new`], which trims both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

impl NotePayload {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        }
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A note as returned by the API. The id is assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creation date as `M/D/YYYY`, the format note cards display.
    pub fn created_date(&self) -> String {
        self.created_at.format("%-m/%-d/%Y").to_string()
    }
}
