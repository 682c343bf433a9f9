//! Shared application state.

use std::sync::Arc;

use jotter_core::{NoteService, NoteStore, Validator};

/// Application state shared across handlers.
///
/// Handlers reach the store only through `service`.
#[derive(Clone)]
pub struct AppState {
    pub service: NoteService,
    pub validator: Validator,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            service: NoteService::new(store),
            validator: Validator::new(),
        }
    }
}
