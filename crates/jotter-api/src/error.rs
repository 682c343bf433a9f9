//! HTTP error classification.
//!
//! [`ApiError`] is the single place where a failure becomes a response:
//! client-caused errors are answered with a `fail` envelope and their own
//! status code, everything else with a generic `error` envelope and 500.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jotter_core::defaults::MSG_INTERNAL_FAILURE;
use tracing::error;

use crate::envelope::Envelope;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    PayloadTooLarge(String),
    Internal(jotter_core::Error),
}

impl From<jotter_core::Error> for ApiError {
    fn from(err: jotter_core::Error) -> Self {
        match err {
            jotter_core::Error::Validation(msg) => ApiError::BadRequest(msg),
            jotter_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Envelope::fail(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Envelope::fail(msg)),
            ApiError::MethodNotAllowed(msg) => {
                (StatusCode::METHOD_NOT_ALLOWED, Envelope::fail(msg))
            }
            ApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, Envelope::fail(msg))
            }
            ApiError::Internal(err) => {
                error!(subsystem = "api", error = %err, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::error(MSG_INTERNAL_FAILURE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
