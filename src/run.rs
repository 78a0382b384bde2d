//! Application execution logic.
//!
//! Builds the HTTP stack from the validated config and sends the
//! configured transaction once.

use thiserror::Error;

use bitwatch_notify::config::ValidatedConfig;
use bitwatch_notify::discord::TransactionNotifier;
use bitwatch_notify::time::Clock;
use bitwatch_notify::webhook::{
    ErrorKind, HttpError, HttpWebhook, ReqwestClient, ResponseBody, WebhookError, WebhookSender,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error(transparent)]
    Client(HttpError),

    /// The notification could not be delivered.
    #[error("Failed to send notification: {0}")]
    Send(#[source] WebhookError),
}

impl RunError {
    /// Returns `true` when the failure was caused by bad input rather than
    /// the network or the remote side.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        match self {
            Self::Client(_) => false,
            Self::Send(e) => matches!(e.kind(), ErrorKind::Configuration),
        }
    }
}

/// Sends the configured transaction to the configured webhook.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The webhook request fails or returns a non-success status
///
/// # Coverage Note
///
/// This function is excluded from coverage because it performs real network I/O.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<ResponseBody, RunError> {
    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::Client)?;
    let notifier = create_notifier(HttpWebhook::new(client), &config);

    send_notification(&notifier, &config).await
}

/// Wraps `sender` in a notifier carrying the configured avatar.
fn create_notifier<S>(sender: S, config: &ValidatedConfig) -> TransactionNotifier<S> {
    let notifier = TransactionNotifier::new(sender);

    match config.avatar_url {
        Some(ref avatar_url) => notifier.with_avatar_url(avatar_url.as_str()),
        None => notifier,
    }
}

/// Sends the configured transaction through `notifier` and logs the outcome.
async fn send_notification<S: WebhookSender, C: Clock>(
    notifier: &TransactionNotifier<S, C>,
    config: &ValidatedConfig,
) -> Result<ResponseBody, RunError> {
    let request = &config.transaction;
    tracing::info!("Sending notification for transaction {}", request.txid);

    match notifier.notify(config.url.as_str(), request).await {
        Ok(body) => {
            tracing::debug!("Webhook accepted notification for {}", request.txid);
            Ok(body)
        }
        Err(e) => {
            if let Some(body) = e.body() {
                tracing::debug!("Webhook response body: {body}");
            }
            Err(RunError::Send(e))
        }
    }
}
