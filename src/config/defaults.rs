//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Environment variable holding the webhook URL.
pub const URL_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Base URL for transaction links when none is given.
pub const MEMPOOL_TX_BASE: &str = "https://mempool.space/tx/";

/// Sample transaction id sent when none is given.
pub const SAMPLE_TXID: &str = "example-txid-000000000000000000000000000000000000000000000000";

/// Sample monitored address.
pub const SAMPLE_ADDRESS: &str = "bc1q...";

/// Sample value in sats.
pub const SAMPLE_VALUE_SATS: u64 = 123_456;

/// Sample extra text.
pub const SAMPLE_EXTRA: &str = "Detected in mempool";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

/// Explorer link for `txid`.
#[must_use]
pub fn mempool_link(txid: &str) -> String {
    format!("{MEMPOOL_TX_BASE}{txid}")
}
