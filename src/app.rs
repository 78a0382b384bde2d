//! Process-level helpers for the binary: exit codes, log setup and
//! hints printed after a configuration failure.

use bitwatch_notify::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit codes reported by `bitwatch-notify`.
pub mod exit_code {
    use std::process::ExitCode;

    /// The notification was accepted.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Nothing was sent because the inputs were unusable.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// A request was attempted and failed, or Discord rejected it.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Suggests a next step for errors a first-time user is likely to hit.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::URL => Some(
            "Export DISCORD_WEBHOOK_URL, pass --url, or create a config file with 'bitwatch-notify init'.",
        ),
        ConfigError::FileRead { .. } => {
            Some("Create a config file with 'bitwatch-notify init', or drop --config.")
        }
        _ => None,
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the level chosen
/// by `--verbose`.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
