//! Error types for the shortening client.
//!
//! # Design
//! `Validation` never leaves the client: it is raised before any request is
//! built. `Http` keeps the server's `error` message separate from the status
//! so the view can fall back to a generic text when the server sent none.

use thiserror::Error;

/// Shown when the input is empty after trimming.
pub const VALIDATION_MESSAGE: &str = "Please enter a URL";

/// Shown when the shorten endpoint fails without an `error` field.
pub const SHORTEN_FALLBACK_MESSAGE: &str = "Failed to shorten URL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The input was empty or whitespace-only.
    #[error("Please enter a URL")]
    Validation,

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Http { status: u16, message: Option<String> },

    /// The host could not execute the request at all.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Text displayed to the user for a failed shorten submission.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation => VALIDATION_MESSAGE.to_string(),
            ApiError::Http { message, .. } => message
                .clone()
                .unwrap_or_else(|| SHORTEN_FALLBACK_MESSAGE.to_string()),
            other => other.to_string(),
        }
    }
}
