//! Note CRUD handlers.
//!
//! Write routes validate the raw JSON body before touching the service, so a
//! rejected payload never mutates the store. Errors are classified by
//! [`ApiError`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use jotter_core::{defaults, Note};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{envelope::Envelope, error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedNote {
    pub note_id: String,
}

#[derive(Debug, Serialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
}

#[derive(Debug, Serialize)]
pub struct SingleNote {
    pub note: Note,
}

/// `POST /notes`
pub async fn post_note(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let payload = state.validator.validate_note_payload(&payload)?;

    let note_id = state.service.add_note(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success_with_message(
            defaults::MSG_NOTE_ADDED,
            CreatedNote { note_id },
        )),
    ))
}

/// `GET /notes`
pub async fn get_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.service.get_notes().await?;
    Ok(Json(Envelope::success(NoteList { notes })))
}

/// `GET /notes/:id`
pub async fn get_note_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(subsystem = "api", note_id = %id, "Fetching note");
    let note = state.service.get_note_by_id(&id).await?;
    Ok(Json(Envelope::success(SingleNote { note })))
}

/// `PUT /notes/:id`
pub async fn put_note_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let payload = state.validator.validate_note_payload(&payload)?;

    state.service.edit_note_by_id(&id, payload).await?;

    Ok(Json(Envelope::message(defaults::MSG_NOTE_UPDATED)))
}

/// `DELETE /notes/:id`
pub async fn delete_note_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.delete_note_by_id(&id).await?;
    Ok(Json(Envelope::message(defaults::MSG_NOTE_DELETED)))
}
