//! JSON-file backed note store.
//!
//! The whole collection is held in memory and rewritten to disk after every
//! successful mutation. Writes go to a sibling `.tmp` file which is then
//! renamed over the target, so a crash mid-write leaves the previous file
//! intact. If the write fails, the in-memory change is rolled back.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jotter_core::{Error, Note, NoteFields, NoteStore, Result};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::{remove_from, replace_in};

/// Note store persisted as a JSON array at `path`.
#[derive(Debug)]
pub struct FileNoteStore {
    path: PathBuf,
    notes: RwLock<Vec<Note>>,
}

impl FileNoteStore {
    /// Load the store from `path`.
    ///
    /// A missing file is an empty store; the file (and its parent
    /// directories) is created on the first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let notes: Vec<Note> = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                Error::Storage(format!("corrupt notes file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(subsystem = "store", path = %path.display(), "Notes file absent, starting empty");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            subsystem = "store",
            path = %path.display(),
            result_count = notes.len(),
            "Opened notes file"
        );

        Ok(Self {
            path,
            notes: RwLock::new(notes),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(notes)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl NoteStore for FileNoteStore {
    async fn append(&self, note: Note) -> Result<()> {
        let mut notes = self.notes.write().await;
        notes.push(note);

        if let Err(e) = self.persist(&notes).await {
            warn!(subsystem = "store", op = "append", error = %e, "Persist failed, rolling back");
            notes.pop();
            return Err(e);
        }
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
        let Some(previous) = notes.iter().find(|n| n.id == id).cloned() else {
            return Ok(None);
        };

        let updated = replace_in(&mut notes, id, fields);

        if let Err(e) = self.persist(&notes).await {
            warn!(subsystem = "store", op = "replace_by_id", note_id = %id, error = %e, "Persist failed, rolling back");
            if let Some(slot) = notes.iter_mut().find(|n| n.id == id) {
                *slot = previous;
            }
            return Err(e);
        }
        Ok(updated)
    }

    async fn remove_by_id(&self, id: &str) -> Result<Option<Note>> {
        let mut notes = self.notes.write().await;
        let Some((index, removed)) = remove_from(&mut notes, id) else {
            return Ok(None);
        };

        if let Err(e) = self.persist(&notes).await {
            warn!(subsystem = "store", op = "remove_by_id", note_id = %id, error = %e, "Persist failed, rolling back");
            notes.insert(index, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }
}
