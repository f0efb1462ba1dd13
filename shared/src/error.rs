//! Normalized API error shared by every resource.

use serde::{Deserialize, Serialize};

/// Message used when a failure carries no recognizable error value
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Stage at which an API call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// Connection, DNS, timeout or abort; no HTTP status was received
    Transport,
    /// Non-2xx HTTP response
    Http,
    /// 2xx response whose body was not the expected JSON
    Decode,
    Unknown,
}

/// Error returned by every API call: a display message plus the HTTP status,
/// or `0` when no status applies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16, kind: ApiErrorKind) -> Self {
        Self {
            message: message.into(),
            status,
            kind,
        }
    }

    /// Error for a non-2xx response
    pub fn http_status(status: u16) -> Self {
        Self::new(format!("HTTP error! status: {}", status), status, ApiErrorKind::Http)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::with_fallback_message(message.into(), ApiErrorKind::Transport)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::with_fallback_message(message.into(), ApiErrorKind::Decode)
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR_MESSAGE, 0, ApiErrorKind::Unknown)
    }

    fn with_fallback_message(message: String, kind: ApiErrorKind) -> Self {
        if message.trim().is_empty() {
            Self::unknown()
        } else {
            Self::new(message, 0, kind)
        }
    }
}
