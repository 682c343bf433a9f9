//! # jotter-store
//!
//! [`NoteStore`](jotter_core::NoteStore) implementations for jotter.
//!
//! - [`MemoryNoteStore`]: a plain list that lives as long as the process
//! - [`FileNoteStore`]: the same list persisted to a JSON file after every mutation
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jotter_core::NoteService;
//! use jotter_store::FileNoteStore;
//!
//! let store = FileNoteStore::open("data/notes.json").await?;
//! let service = NoteService::new(Arc::new(store));
//! ```

pub mod file;
pub mod memory;

pub use file::FileNoteStore;
pub use memory::MemoryNoteStore;

use jotter_core::{Note, NoteFields};

/// Apply `fields` to the note with `id`, returning the updated copy.
pub(crate) fn replace_in(notes: &mut [Note], id: &str, fields: NoteFields) -> Option<Note> {
    notes.iter_mut().find(|n| n.id == id).map(|note| {
        note.apply(fields);
        note.clone()
    })
}

/// Remove the note with `id`, returning its position and value.
pub(crate) fn remove_from(notes: &mut Vec<Note>, id: &str) -> Option<(usize, Note)> {
    let index = notes.iter().position(|n| n.id == id)?;
    Some((index, notes.remove(index)))
}
