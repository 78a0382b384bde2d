//! Decoded webhook response bodies.

use std::fmt;

/// A buffered response body after content-type classification.
///
/// Successful sends resolve to this value, and
/// [`WebhookError::Status`](super::WebhookError::Status) carries one so the
/// server's explanation is never lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// The server declared JSON and the body parsed.
    Json(serde_json::Value),
    /// Anything else, including declared JSON that failed to parse.
    Text(String),
}

impl ResponseBody {
    /// Returns the parsed JSON value, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if the body was not parsed as JSON.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
