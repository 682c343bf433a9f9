//! HTTP handlers for jotter-api.

pub mod fallback;
pub mod health;
pub mod notes;
