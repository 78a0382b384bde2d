//! Error types for HTTP and webhook operations.

use thiserror::Error;

use super::ResponseBody;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level, before any
/// response status is known.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL was rejected by the HTTP client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Broad category of a [`WebhookError`].
///
/// Lets callers branch on the failure class without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected locally before any network I/O.
    Configuration,
    /// The request never produced a response.
    Transport,
    /// A response arrived with a status outside `200..300`.
    HttpStatus,
}

/// Error type for a single webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No webhook URL was supplied.
    #[error("Webhook URL is required (DISCORD_WEBHOOK_URL)")]
    MissingUrl,

    /// The webhook URL could not be parsed.
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL string
        url: String,
        /// Parser error message
        reason: String,
    },

    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The request failed before a response was received.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The server answered with a non-success status.
    #[error("Webhook returned {status}{}", non_json_note(.unparsed_json))]
    Status {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body, parsed as JSON when possible
        body: ResponseBody,
        /// The response declared JSON but the body did not parse
        unparsed_json: bool,
    },
}

impl WebhookError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingUrl | Self::InvalidUrl { .. } | Self::Serialize(_) => {
                ErrorKind::Configuration
            }
            Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::HttpStatus,
        }
    }

    /// Returns the HTTP status for [`WebhookError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body for [`WebhookError::Status`] errors.
    #[must_use]
    pub const fn body(&self) -> Option<&ResponseBody> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn non_json_note(unparsed_json: &bool) -> &'static str {
    if *unparsed_json { " and non-JSON body" } else { "" }
}
