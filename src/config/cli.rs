//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::discord::Direction;

/// bitwatch-notify: Discord alerts for bitcoin transactions
///
/// Posts one embed describing a transaction to a Discord webhook.
/// Without transaction flags a sample transaction is sent, which is
/// handy for checking that a webhook works.
#[derive(Debug, Parser)]
#[command(name = "bitwatch-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Discord webhook URL (falls back to $DISCORD_WEBHOOK_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Avatar image URL for the webhook message
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// Transaction id
    #[arg(long)]
    pub txid: Option<String>,

    /// Monitored address
    #[arg(long)]
    pub address: Option<String>,

    /// Value moved, in sats
    #[arg(long = "value-sats")]
    pub value_sats: Option<u64>,

    /// Direction relative to the monitored address
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Explorer link (default: mempool.space link for the txid)
    #[arg(long)]
    pub link: Option<String>,

    /// Extra free text appended to the message
    #[arg(long)]
    pub extra: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for bitwatch-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "bitwatch-notify.toml")]
        output: PathBuf,
    },
}

/// Direction argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Incoming transaction
    In,
    /// Outgoing transaction
    Out,
    /// Direction not known
    Unknown,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::In => Self::In,
            DirectionArg::Out => Self::Out,
            DirectionArg::Unknown => Self::Unknown,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
