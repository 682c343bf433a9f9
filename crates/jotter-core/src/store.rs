//! Storage abstraction for the note collection.
//!
//! A store performs raw lookups and mutations only. It never generates
//! identifiers or timestamps and never checks uniqueness; that is the job of
//! [`crate::NoteService`], the only caller of the mutating operations.
//!
//! Absence is reported as `Ok(None)`; `Err` is reserved for backend failures.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, NoteFields};

/// Holds the current collection of notes in insertion order.
///
/// Implementations must make each mutating call exclusive so that concurrent
/// requests cannot interleave within one operation.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Add a fully-formed note at the end of the collection.
    async fn append(&self, note: Note) -> Result<()>;

    /// Snapshot of every note in insertion order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Find a note by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Note>>;

    /// Overwrite title, body, tags and updated_at of the matching note.
    ///
    /// Returns the note as stored after the write.
    async fn replace_by_id(&self, id: &str, fields: NoteFields) -> Result<Option<Note>>;

    /// Delete the matching note, returning it.
    async fn remove_by_id(&self, id: &str) -> Result<Option<Note>>;
}
