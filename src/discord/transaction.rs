//! Transaction notification input types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which way value moved relative to the monitored address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Value received by the address.
    In,
    /// Value spent from the address.
    Out,
    /// The watcher could not tell.
    Unknown,
}

impl Direction {
    /// Returns the lowercase label shown in the embed.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid direction '{0}': expected in, out, or unknown")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "incoming" => Ok(Self::In),
            "out" | "outgoing" => Ok(Self::Out),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Fields describing one detected transaction.
///
/// Only `txid` is required. Every other field adds one line to the embed
/// description when present and non-empty.
///
/// # Example
///
/// ```
/// use bitwatch_notify::discord::{Direction, NotificationRequest};
///
/// let request = NotificationRequest::new("abc")
///     .with_address("bc1q...")
///     .with_value_sats(1000)
///     .with_direction(Direction::In);
/// assert_eq!(request.txid, "abc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    pub address: Option<String>,
    pub txid: String,
    pub value_sats: Option<u64>,
    pub direction: Option<Direction>,
    pub link: Option<String>,
    pub extra: Option<String>,
}

impl NotificationRequest {
    /// Creates a request for `txid` with no optional fields.
    #[must_use]
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub const fn with_value_sats(mut self, value_sats: u64) -> Self {
        self.value_sats = Some(value_sats);
        self
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}
