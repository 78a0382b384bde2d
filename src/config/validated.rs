//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::discord::{Direction, NotificationRequest};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{TomlConfig, TransactionSection};

/// Fully validated configuration ready for use by the driver.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] with explicit sources, or
/// [`ValidatedConfig::load`] to read the environment and config file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Discord webhook URL (required)
    pub url: Url,

    /// Per-request timeout
    pub timeout: Duration,

    /// Avatar override for messages
    pub avatar_url: Option<String>,

    /// Transaction to announce
    pub transaction: NotificationRequest,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The webhook path embeds its secret token, so only the host is shown.
        write!(
            f,
            "Config {{ webhook_host: {}, timeout: {}s, txid: {}, avatar: {} }}",
            self.url.host_str().unwrap_or("-"),
            self.timeout.as_secs(),
            self.transaction.txid,
            self.avatar_url.is_some(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from explicit sources.
    ///
    /// Priority for every value: CLI > environment (URL only) > TOML > default.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No webhook URL is given anywhere
    /// - A URL does not parse
    /// - The timeout is zero
    /// - The TOML direction is not recognized
    pub fn from_raw(
        cli: &Cli,
        env_url: Option<&str>,
        toml: Option<&TomlConfig>,
    ) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, env_url, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let avatar_url = Self::resolve_avatar_url(cli, toml)?;
        let transaction = Self::build_transaction(cli, toml.map(|t| &t.transaction))?;

        Ok(Self {
            url,
            timeout,
            avatar_url,
            transaction,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, `DISCORD_WEBHOOK_URL`
    /// and the optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let env_url = std::env::var(defaults::URL_ENV).ok();

        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, env_url.as_deref(), toml.as_ref())
    }

    fn resolve_url(
        cli: &Cli,
        env_url: Option<&str>,
        toml: Option<&TomlConfig>,
    ) -> Result<Url, ConfigError> {
        let url_str = non_blank(cli.url.as_deref())
            .or_else(|| non_blank(env_url))
            .or_else(|| non_blank(toml.and_then(|t| t.webhook.url.as_deref())))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::URL,
                    "Use --url, set DISCORD_WEBHOOK_URL, or set webhook.url in config file",
                )
            })?;

        parse_url(url_str)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_avatar_url(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<String>, ConfigError> {
        let avatar = non_blank(cli.avatar_url.as_deref())
            .or_else(|| non_blank(toml.and_then(|t| t.webhook.avatar_url.as_deref())));

        avatar
            .map(|a| parse_url(a).map(|_| a.to_string()))
            .transpose()
    }

    fn build_transaction(
        cli: &Cli,
        section: Option<&TransactionSection>,
    ) -> Result<NotificationRequest, ConfigError> {
        let txid = first_non_blank(cli.txid.as_deref(), section.and_then(|s| s.txid.as_deref()))
            .unwrap_or_else(|| defaults::SAMPLE_TXID.to_string());

        let address =
            first_non_blank(cli.address.as_deref(), section.and_then(|s| s.address.as_deref()))
                .unwrap_or_else(|| defaults::SAMPLE_ADDRESS.to_string());

        let link = first_non_blank(cli.link.as_deref(), section.and_then(|s| s.link.as_deref()))
            .unwrap_or_else(|| defaults::mempool_link(&txid));

        let extra = first_non_blank(cli.extra.as_deref(), section.and_then(|s| s.extra.as_deref()))
            .unwrap_or_else(|| defaults::SAMPLE_EXTRA.to_string());

        let value_sats = cli
            .value_sats
            .or_else(|| section.and_then(|s| s.value_sats))
            .unwrap_or(defaults::SAMPLE_VALUE_SATS);

        let toml_direction = non_blank(section.and_then(|s| s.direction.as_deref()));
        let direction = match (cli.direction, toml_direction) {
            (Some(arg), _) => arg.into(),
            (None, Some(value)) => parse_direction(value)?,
            (None, None) => Direction::In,
        };

        Ok(NotificationRequest::new(txid)
            .with_address(address)
            .with_value_sats(value_sats)
            .with_direction(direction)
            .with_link(link)
            .with_extra(extra))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// CLI value if set, else the TOML value; blanks count as unset.
fn first_non_blank(cli: Option<&str>, toml: Option<&str>) -> Option<String> {
    non_blank(cli).or_else(|| non_blank(toml)).map(str::to_string)
}

fn parse_url(s: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
        url: s.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            url: s.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn parse_direction(s: &str) -> Result<Direction, ConfigError> {
    s.parse::<Direction>()
        .map_err(|_| ConfigError::InvalidDirection {
            value: s.to_string(),
        })
}
