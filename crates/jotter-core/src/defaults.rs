//! Centralized default constants for jotter.
//!
//! All crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// NOTES
// =============================================================================

/// Title given to a note created without one.
pub const NOTE_TITLE: &str = "untitled";

/// Length of a generated note identifier.
pub const NOTE_ID_LENGTH: usize = 16;

/// How many fresh identifiers the service tries before giving up on a collision.
pub const ID_GENERATION_ATTEMPTS: usize = 8;

// =============================================================================
// MESSAGES
// =============================================================================

pub const MSG_NOTE_ADDED: &str = "Note added successfully";
pub const MSG_NOTE_UPDATED: &str = "Note updated successfully";
pub const MSG_NOTE_DELETED: &str = "Note deleted successfully";
pub const MSG_NOTE_NOT_FOUND: &str = "Note not found";
pub const MSG_UPDATE_NOT_FOUND: &str = "Failed to update note. Id not found";
pub const MSG_DELETE_NOT_FOUND: &str = "Failed to delete note. Id not found";
pub const MSG_ROUTE_NOT_FOUND: &str = "Route not found";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Returned to the caller for every internal failure.
pub const MSG_INTERNAL_FAILURE: &str = "Sorry, our server encountered an unexpected failure.";

// =============================================================================
// SERVER
// =============================================================================

/// Default bind address.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Default request body limit in bytes (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default path of the JSON file used by the file store.
pub const NOTES_FILE: &str = "data/notes.json";
