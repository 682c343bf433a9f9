//! Uniform JSON response envelope.
//!
//! Every response carries `status` (`"success"`, `"fail"` or `"error"`),
//! and optionally `message` and `data`.

use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAIL: &str = "fail";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T = ()> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// `{status: "success", data}`
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: None,
            data: Some(data),
        }
    }

    /// `{status: "success", message, data}`
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// `{status: "success", message}`
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Client-caused failure: `{status: "fail", message}`
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAIL,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Internal failure: `{status: "error", message}`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: Some(message.into()),
            data: None,
        }
    }
}
