//! Normalization of every request failure into one error shape.
//!
//! Failures are classified in order:
//!
//! 1. A response arrived with a non-success status. The server's `detail`
//!    (or `message`) field becomes the message and the HTTP status is kept.
//! 2. The request went out but no response came back (connect failure,
//!    timeout, dropped connection). Status code is 0.
//! 3. Anything else, such as an invalid URL, a bad multipart part, an
//!    unreadable file or an undecodable body. Status code is 0 and the
//!    underlying error text is kept when there is one.

use reqwest::StatusCode;
use serde::Serialize;
use std::fmt::Display;

/// Message used when the server rejected a request without saying why.
pub const GENERIC_SERVER_MESSAGE: &str = "The server returned an error.";

/// Message used when no response was received.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Check your network connection.";

/// Message used for local failures that carry no text of their own.
pub const GENERIC_LOCAL_MESSAGE: &str = "An unexpected error occurred.";

/// Result alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Uniform error returned by every client operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status, or 0 when no response was obtained.
    pub status_code: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Case 1: the server answered with a non-success status.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message =
            server_message(body).unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string());
        Self::new(message, status.as_u16())
    }

    /// Case 2: the request was sent but nothing came back.
    pub fn unreachable() -> Self {
        Self::new(UNREACHABLE_MESSAGE, 0)
    }

    /// Case 3: a failure on this side of the wire.
    pub fn local(source: impl Display) -> Self {
        let text = source.to_string();
        let text = text.trim();
        if text.is_empty() {
            Self::new(GENERIC_LOCAL_MESSAGE, 0)
        } else {
            Self::new(text, 0)
        }
    }

    /// Classifies a transport-level reqwest failure.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::new(GENERIC_SERVER_MESSAGE, status.as_u16());
        }

        if error.is_timeout() || error.is_connect() || error.is_request() || error.is_body() {
            return Self::unreachable();
        }

        Self::local(error)
    }

    /// True when the failure happened before any response was received.
    pub fn is_unreachable(&self) -> bool {
        self.status_code == 0 && self.message == UNREACHABLE_MESSAGE
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self.status_code {
            0 => None,
            code => StatusCode::from_u16(code).ok(),
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Only string-valued `detail` or `message` fields count; validation errors
/// that carry a list in `detail` fall back to the generic message.
fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["detail", "message"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}
