//! Shape validation for note payloads.
//!
//! Turns an untyped JSON body into a [`NotePayload`] or a
//! [`Error::Validation`] naming the offending field. Only the shape is
//! checked: no length limits, no duplicate-tag rules.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::NotePayload;

/// Validates create and edit payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check that `body` is a string and, when present, that `title` is a
    /// string and `tags` is an array of strings.
    pub fn validate_note_payload(&self, payload: &Value) -> Result<NotePayload> {
        let object = payload
            .as_object()
            .ok_or_else(|| Error::Validation("Payload must be a JSON object".to_string()))?;

        let body = match object.get("body") {
            None => return Err(Error::Validation("\"body\" is required".to_string())),
            Some(value) => expect_string("body", value)?,
        };

        let title = object
            .get("title")
            .map(|value| expect_string("title", value))
            .transpose()?;

        let tags = validate_tags(object)?;

        Ok(NotePayload { title, body, tags })
    }
}

fn expect_string(field: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| Error::Validation(format!("\"{}\" must be a string", field)))
}

fn validate_tags(object: &Map<String, Value>) -> Result<Vec<String>> {
    let Some(value) = object.get("tags") else {
        return Ok(Vec::new());
    };

    let items = value
        .as_array()
        .ok_or_else(|| Error::Validation("\"tags\" must be an array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| expect_string(&format!("tags[{}]", i), item))
        .collect()
}
