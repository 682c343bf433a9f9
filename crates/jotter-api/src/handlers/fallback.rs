//! Envelope responses for requests no route handles.

use jotter_core::defaults;

use crate::error::ApiError;

/// Any path without a route.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(defaults::MSG_ROUTE_NOT_FOUND.to_string())
}

/// A known path hit with a method it does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(defaults::MSG_METHOD_NOT_ALLOWED.to_string())
}
