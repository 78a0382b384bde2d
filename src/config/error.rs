//! Errors raised while assembling the driver configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong before a notification is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `--config` file could not be opened or read.
    #[error("Cannot read config file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Config file is not valid: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write its template.
    #[error("Cannot write config file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value with no default was not supplied by any source.
    #[error("No {field} configured. {hint}")]
    MissingRequired {
        field: &'static str,
        /// How the user can supply the value
        hint: &'static str,
    },

    /// A webhook or avatar URL failed to parse or uses another scheme.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A duration that must be positive was zero.
    #[error("Invalid {field}: {reason}")]
    InvalidDuration {
        field: &'static str,
        reason: String,
    },

    /// The `transaction.direction` key holds an unrecognized word.
    #[error("Invalid direction '{value}': expected in, out, or unknown")]
    InvalidDirection { value: String },
}

/// Field names carried by [`ConfigError::MissingRequired`].
pub mod field {
    /// Discord webhook URL.
    pub const URL: &str = "url";
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingRequired`].
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
