//! Note data model and payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short text note.
///
/// `id` and `created_at` are fixed at creation; `updated_at` moves forward on
/// every successful edit and never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A create/edit payload that has passed [`crate::Validator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePayload {
    /// `None` when the caller omitted the title.
    pub title: Option<String>,
    pub body: String,
    pub tags: Vec<String>,
}

/// Mutable fields written by a replace-by-id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Overwrite the mutable fields, leaving `id` and `created_at` alone.
    ///
    /// `updated_at` never moves backwards: an edit stamped earlier than the
    /// current `updated_at` (wall clock stepped back) keeps the current value.
    /// Since `updated_at >= created_at` already holds, that ordering is kept too.
    pub fn apply(&mut self, fields: NoteFields) {
        self.title = fields.title;
        self.body = fields.body;
        self.tags = fields.tags;
        self.updated_at = fields.updated_at.max(self.updated_at);
    }
}
