//! jotter-api - HTTP API server for jotter.
//!
//! Exposes the note service over five routes:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST   | `/notes`      | [`handlers::notes::post_note`] |
//! | GET    | `/notes`      | [`handlers::notes::get_notes`] |
//! | GET    | `/notes/:id`  | [`handlers::notes::get_note_by_id`] |
//! | PUT    | `/notes/:id`  | [`handlers::notes::put_note_by_id`] |
//! | DELETE | `/notes/:id`  | [`handlers::notes::delete_note_by_id`] |
//!
//! plus `GET /health` for liveness probes. Every response body is an
//! [`Envelope`], including unknown routes (404) and unsupported methods (405).

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod state;
pub mod telemetry;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

pub use config::{ServerConfig, StoreKind};
pub use envelope::Envelope;
pub use error::ApiError;
pub use state::AppState;

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Build the application router with tracing, request-id and body-limit layers.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    use handlers::{fallback, health, notes};

    Router::new()
        .route(
            "/health",
            get(health::health_check).fallback(fallback::method_not_allowed),
        )
        .route(
            "/notes",
            post(notes::post_note)
                .get(notes::get_notes)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/notes/:id",
            get(notes::get_note_by_id)
                .put(notes::put_note_by_id)
                .delete(notes::delete_note_by_id)
                .fallback(fallback::method_not_allowed),
        )
        .fallback(fallback::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        // axum's extractors carry their own 2 MiB default; the tower-http layer is the only limit
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}
