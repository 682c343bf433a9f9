//! Note service: identifier and timestamp generation around a [`NoteStore`].
//!
//! The service is the only component that calls the store's mutating
//! operations. It is constructed once with an injected store and cloned
//! into each request handler.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::defaults;
use crate::error::{Error, Result};
use crate::id::generate_note_id;
use crate::models::{Note, NoteFields, NotePayload};
use crate::store::NoteStore;

/// Orchestrates note creation, lookup, editing and deletion.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
    id_generator: fn() -> String,
}

impl NoteService {
    /// Create a service over the given store using random short-code ids.
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self::with_id_generator(store, generate_note_id)
    }

    /// Create a service with a custom identifier generator.
    pub fn with_id_generator(store: Arc<dyn NoteStore>, id_generator: fn() -> String) -> Self {
        Self {
            store,
            id_generator,
        }
    }

    /// Create a note from a validated payload and return its identifier.
    ///
    /// A generated id that already exists in the store is discarded and a new
    /// one drawn, up to [`defaults::ID_GENERATION_ATTEMPTS`] times.
    pub async fn add_note(&self, payload: NotePayload) -> Result<String> {
        let id = self.fresh_id().await?;
        let now = Utc::now();

        let note = Note {
            id: id.clone(),
            title: payload
                .title
                .unwrap_or_else(|| defaults::NOTE_TITLE.to_string()),
            body: payload.body,
            tags: payload.tags,
            created_at: now,
            updated_at: now,
        };

        self.store.append(note).await?;
        info!(subsystem = "service", op = "add_note", note_id = %id, "Note added");
        Ok(id)
    }

    /// Every note in insertion order.
    pub async fn get_notes(&self) -> Result<Vec<Note>> {
        let notes = self.store.list().await?;
        debug!(
            subsystem = "service",
            op = "get_notes",
            result_count = notes.len(),
            "Listed notes"
        );
        Ok(notes)
    }

    pub async fn get_note_by_id(&self, id: &str) -> Result<Note> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(defaults::MSG_NOTE_NOT_FOUND.to_string()))
    }

    /// Replace title, body and tags of an existing note.
    ///
    /// An omitted title falls back to the default placeholder, mirroring
    /// creation, so the edit always writes every mutable field.
    pub async fn edit_note_by_id(&self, id: &str, payload: NotePayload) -> Result<Note> {
        let fields = NoteFields {
            title: payload
                .title
                .unwrap_or_else(|| defaults::NOTE_TITLE.to_string()),
            body: payload.body,
            tags: payload.tags,
            updated_at: Utc::now(),
        };

        let note = self
            .store
            .replace_by_id(id, fields)
            .await?
            .ok_or_else(|| Error::NotFound(defaults::MSG_UPDATE_NOT_FOUND.to_string()))?;

        info!(subsystem = "service", op = "edit_note_by_id", note_id = %id, "Note updated");
        Ok(note)
    }

    pub async fn delete_note_by_id(&self, id: &str) -> Result<()> {
        self.store
            .remove_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(defaults::MSG_DELETE_NOT_FOUND.to_string()))?;

        info!(subsystem = "service", op = "delete_note_by_id", note_id = %id, "Note deleted");
        Ok(())
    }

    async fn fresh_id(&self) -> Result<String> {
        for attempt in 1..=defaults::ID_GENERATION_ATTEMPTS {
            let id = (self.id_generator)();
            if self.store.find_by_id(&id).await?.is_none() {
                return Ok(id);
            }
            warn!(
                subsystem = "service",
                note_id = %id,
                attempt,
                "Generated note id collided, retrying"
            );
        }

        Err(Error::Internal(format!(
            "no unused note id after {} attempts",
            defaults::ID_GENERATION_ATTEMPTS
        )))
    }
}
