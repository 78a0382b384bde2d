//! Webhook sender trait and HTTP implementation.

use http::header::{HeaderValue, USER_AGENT as USER_AGENT_HEADER};
use serde::Serialize;

use super::{HttpClient, HttpRequest, HttpResponse, ResponseBody, WebhookError};

/// `User-Agent` sent with every webhook request.
pub const USER_AGENT: &str = "bitwatch-discord-notifier/1.0";

/// Trait for delivering a JSON payload to a webhook URL.
///
/// Lets the notifier run against a mock in tests instead of a real
/// HTTP endpoint.
pub trait WebhookSender: Send + Sync {
    /// POSTs `payload` as JSON to `url` and classifies the response.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::MissingUrl`] / [`WebhookError::InvalidUrl`] before any I/O
    /// - [`WebhookError::Transport`] when no response was received
    /// - [`WebhookError::Status`] for responses outside `200..300`
    fn send<P>(
        &self,
        url: &str,
        payload: &P,
    ) -> impl std::future::Future<Output = Result<ResponseBody, WebhookError>> + Send
    where
        P: Serialize + Sync;
}

/// HTTP-based webhook sender.
///
/// Issues exactly one POST per call. There is no retry: transport errors and
/// non-success statuses are returned to the caller as-is.
///
/// # Example
///
/// ```no_run
/// use bitwatch_notify::webhook::{HttpWebhook, ReqwestClient, WebhookSender};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let webhook = HttpWebhook::new(ReqwestClient::with_timeout(Duration::from_secs(10))?);
/// let body = webhook
///     .send("https://discord.com/api/webhooks/1/abc", &serde_json::json!({"content": "hi"}))
///     .await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
}

impl<H> HttpWebhook<H> {
    /// Creates a sender that uses `client` for transport.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> WebhookSender for HttpWebhook<H> {
    async fn send<P>(&self, url: &str, payload: &P) -> Result<ResponseBody, WebhookError>
    where
        P: Serialize + Sync,
    {
        let request = build_request(url, payload)?;

        tracing::debug!(
            host = request.url.host_str().unwrap_or_default(),
            bytes = request.body.as_ref().map_or(0, Vec::len),
            "Posting webhook payload"
        );

        let response = self.client.request(request).await?;
        tracing::debug!(status = %response.status, "Webhook responded");

        classify(response)
    }
}

fn build_request<P: Serialize>(url: &str, payload: &P) -> Result<HttpRequest, WebhookError> {
    let url = parse_url(url)?;
    let body = serde_json::to_vec(payload).map_err(WebhookError::Serialize)?;

    Ok(HttpRequest::post(url)
        .with_json_body(body)
        .with_header(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT)))
}

fn parse_url(raw: &str) -> Result<url::Url, WebhookError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WebhookError::MissingUrl);
    }

    let url = url::Url::parse(trimmed).map_err(|e| WebhookError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(WebhookError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Turns a buffered response into a body or a status error.
///
/// A body that claims to be JSON but does not parse is handled as text.
fn classify(response: HttpResponse) -> Result<ResponseBody, WebhookError> {
    let (body, unparsed_json) = parse_body(&response);

    if response.is_success() {
        Ok(body)
    } else {
        Err(WebhookError::Status {
            status: response.status,
            body,
            unparsed_json,
        })
    }
}

/// Returns the body and whether a declared JSON body failed to parse.
fn parse_body(response: &HttpResponse) -> (ResponseBody, bool) {
    if !response.declares_json() {
        return (ResponseBody::Text(response.body_text_lossy()), false);
    }

    match serde_json::from_slice(&response.body) {
        Ok(value) => (ResponseBody::Json(value), false),
        Err(e) => {
            tracing::debug!("Declared JSON body did not parse ({e}), using raw text");
            (ResponseBody::Text(response.body_text_lossy()), true)
        }
    }
}
