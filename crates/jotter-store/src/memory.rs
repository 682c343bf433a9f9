//! Process-local note store.

use async_trait::async_trait;
use jotter_core::{Note, NoteFields, NoteStore, Result};
use tokio::sync::RwLock;
use tracing::trace;

use crate::{remove_from, replace_in};

/// Notes kept in a `Vec` behind an async `RwLock`.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `notes`, kept in the given order.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn append(&self, note: Note) -> Result<()> {
        trace!(subsystem = "store", note_id = %note.id, "append");
        self.notes.write().await.push(note);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.notes.read().await.iter().find(|n| n.id == id).cloned())
    }

    async fn replace_by_id(&self, id: &str, fields: NoteFields) -> Result<Option<Note>> {
        let mut notes = self.notes.write().await;
        Ok(replace_in(&mut notes, id, fields))
    }

    async fn remove_by_id(&self, id: &str) -> Result<Option<Note>> {
        let mut notes = self.notes.write().await;
        Ok(remove_from(&mut notes, id).map(|(_, note)| note))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn note(id: &str, body: &str) -> Note {
        let now = Utc::now();
        Note {
            id: id.to_string(),
            title: "untitled".to_string(),
            body: body.to_string(),
            tags: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_append_and_list_in_insertion_order() {
        let store = MemoryNoteStore::new();
        store.append(note("b", "second id first")).await.unwrap();
        store.append(note("a", "first id second")).await.unwrap();

        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryNoteStore::with_notes(vec![note("a", "alpha"), note("b", "beta")]);

        assert_eq!(store.find_by_id("b").await.unwrap().unwrap().body, "beta");
        assert!(store.find_by_id("c").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_by_id_updates_in_place() {
        let original = note("a", "alpha");
        let store = MemoryNoteStore::with_notes(vec![original.clone(), note("b", "beta")]);
        let later = original.created_at + Duration::seconds(1);

        let updated = store
            .replace_by_id(
                "a",
                NoteFields {
                    title: "Alpha".to_string(),
                    body: "alpha v2".to_string(),
                    tags: vec!["greek".to_string()],
                    updated_at: later,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, "a");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.updated_at, later);

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0], updated);
        assert_eq!(listed[1].body, "beta");
    }

    #[tokio::test]
    async fn test_replace_missing_returns_none() {
        let store = MemoryNoteStore::with_notes(vec![note("a", "alpha")]);
        let result = store
            .replace_by_id(
                "zzz",
                NoteFields {
                    title: "t".to_string(),
                    body: "b".to_string(),
                    tags: vec![],
                    updated_at: Utc::now(),
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.list().await.unwrap()[0].body, "alpha");
    }

    #[tokio::test]
    async fn test_remove_by_id() {
        let store = MemoryNoteStore::with_notes(vec![note("a", "alpha"), note("b", "beta")]);

        let removed = store.remove_by_id("a").await.unwrap().unwrap();
        assert_eq!(removed.id, "a");
        assert!(store.remove_by_id("a").await.unwrap().is_none());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
