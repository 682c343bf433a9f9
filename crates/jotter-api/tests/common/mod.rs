//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use jotter_api::{router, AppState};
use jotter_core::{defaults, NoteStore};
use jotter_store::MemoryNoteStore;
use serde_json::Value;
use tower::ServiceExt;

pub fn app_with_store(store: Arc<dyn NoteStore>) -> Router {
    router(AppState::new(store), defaults::MAX_BODY_BYTES)
}

pub fn app() -> Router {
    app_with_store(Arc::new(MemoryNoteStore::new()))
}

/// Send a request and return the status and parsed JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Create a note and return its id.
pub async fn create_note(app: &Router, payload: Value) -> String {
    let (status, json) = send(app, Method::POST, "/notes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", json);
    json["data"]["noteId"].as_str().unwrap().to_string()
}
