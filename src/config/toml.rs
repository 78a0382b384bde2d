//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Transaction sent by the driver
    #[serde(default)]
    pub transaction: TransactionSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Discord webhook URL
    pub url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Avatar image URL
    pub avatar_url: Option<String>,
}

/// Transaction section; any field left out uses the sample value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionSection {
    pub txid: Option<String>,
    pub address: Option<String>,
    pub value_sats: Option<u64>,
    /// "in", "out" or "unknown"
    pub direction: Option<String>,
    pub link: Option<String>,
    pub extra: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# bitwatch-notify configuration file

[webhook]
# Discord webhook URL (required unless --url or DISCORD_WEBHOOK_URL is set)
# url = "https://discord.com/api/webhooks/<id>/<token>"

# Request timeout in seconds (default: 10)
timeout = 10

# Avatar image shown next to the message
# avatar_url = "https://example.com/bitwatch.png"

[transaction]
# Transaction to announce. Unset fields fall back to sample values.
# txid = "<64 hex chars>"
# address = "bc1q..."
# value_sats = 123456
# direction = "in"        # in, out or unknown
# link = "https://mempool.space/tx/<txid>"
# extra = "Detected in mempool"
"#
    .to_string()
}
