//! Configuration layer for the bitwatch-notify driver.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **`DISCORD_WEBHOOK_URL`** - webhook URL only
//! 3. **TOML config file**
//! 4. **Built-in defaults**
//!
//! The webhook URL has no default. Blank values count as unset at every level.
//!
//! The environment is read only by [`ValidatedConfig::load`]; the library's
//! sender and notifier take the URL as a plain argument.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, DirectionArg};
pub use error::{ConfigError, field};
pub use self::toml::{TomlConfig, TransactionSection, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
