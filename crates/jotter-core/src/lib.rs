//! # jotter-core
//!
//! Core types, traits, and services for the jotter notes API.
//!
//! This crate provides the note data model, payload validation, the
//! [`NoteStore`] abstraction that storage backends implement, and the
//! [`NoteService`] that is the sole mutator of a store.

pub mod defaults;
pub mod error;
pub mod id;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use id::generate_note_id;
pub use models::*;
pub use service::NoteService;
pub use store::NoteStore;
pub use validation::Validator;
