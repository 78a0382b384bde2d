//! Transaction notifier: formats a transaction and hands it to a sender.

use crate::time::{Clock, SystemClock};
use crate::webhook::{ResponseBody, WebhookError, WebhookSender};

use super::format::build_payload;
use super::transaction::NotificationRequest;

/// Sends one Discord embed per detected transaction.
///
/// Holds no per-call state, so a single notifier can serve concurrent
/// callers.
///
/// # Type Parameters
///
/// - `S`: The webhook sender used for delivery
/// - `C`: The clock stamping each embed (defaults to [`SystemClock`])
///
/// # Example
///
/// ```no_run
/// use bitwatch_notify::discord::{Direction, NotificationRequest, TransactionNotifier};
/// use bitwatch_notify::webhook::{HttpWebhook, ReqwestClient};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sender = HttpWebhook::new(ReqwestClient::with_timeout(Duration::from_secs(10))?);
/// let notifier = TransactionNotifier::new(sender);
/// let request = NotificationRequest::new("abc").with_direction(Direction::In);
/// notifier
///     .notify("https://discord.com/api/webhooks/1/token", &request)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TransactionNotifier<S, C = SystemClock> {
    sender: S,
    clock: C,
    avatar_url: Option<String>,
}

impl<S> TransactionNotifier<S, SystemClock> {
    /// Creates a notifier stamping embeds with the system clock.
    #[must_use]
    pub const fn new(sender: S) -> Self {
        Self {
            sender,
            clock: SystemClock,
            avatar_url: None,
        }
    }
}

impl<S, C> TransactionNotifier<S, C> {
    /// Replaces the clock used for embed timestamps.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> TransactionNotifier<S, C2> {
        TransactionNotifier {
            sender: self.sender,
            clock,
            avatar_url: self.avatar_url,
        }
    }

    /// Sets an avatar override for every message.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Returns the underlying sender.
    #[must_use]
    pub const fn sender(&self) -> &S {
        &self.sender
    }
}

impl<S: WebhookSender, C: Clock> TransactionNotifier<S, C> {
    /// Formats `request` and POSTs it to `url`.
    ///
    /// # Errors
    ///
    /// Returns whatever the sender returns; nothing is retried or wrapped.
    pub async fn notify(
        &self,
        url: &str,
        request: &NotificationRequest,
    ) -> Result<ResponseBody, WebhookError> {
        let mut payload = build_payload(request, self.clock.now());
        if let Some(ref avatar_url) = self.avatar_url {
            payload = payload.with_avatar_url(avatar_url.clone());
        }

        tracing::debug!(txid = %request.txid, "Sending transaction notification");
        self.sender.send(url, &payload).await
    }
}
