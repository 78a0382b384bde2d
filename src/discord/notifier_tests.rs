//! Tests for `TransactionNotifier`.

use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use super::{COLOR_OUT, Direction, NotificationRequest, TransactionNotifier};
use crate::time::FixedClock;
use crate::webhook::{HttpError, ResponseBody, WebhookError, WebhookSender};

/// Records every `(url, payload)` pair and replays a canned outcome.
struct RecordingSender {
    sent: Mutex<Vec<(String, Value)>>,
    outcome: fn() -> Result<ResponseBody, WebhookError>,
}

impl RecordingSender {
    fn replying(outcome: fn() -> Result<ResponseBody, WebhookError>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            outcome,
        }
    }

    fn ok() -> Self {
        Self::replying(|| Ok(ResponseBody::Text(String::new())))
    }

    fn sent(&self) -> Vec<(String, Value)> {
        self.sent.lock().unwrap().clone()
    }
}

impl WebhookSender for RecordingSender {
    async fn send<P>(&self, url: &str, payload: &P) -> Result<ResponseBody, WebhookError>
    where
        P: Serialize + Sync,
    {
        let value = serde_json::to_value(payload).unwrap();
        self.sent.lock().unwrap().push((url.to_string(), value));
        (self.outcome)()
    }
}

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

const URL: &str = "https://discord.com/api/webhooks/1/token";

mod notify {
    use super::*;

    #[tokio::test]
    async fn sends_formatted_payload_to_url() {
        let notifier = TransactionNotifier::new(RecordingSender::ok()).with_clock(clock());
        let request = NotificationRequest::new("ff00")
            .with_value_sats(2_500_000)
            .with_direction(Direction::Out);

        notifier.notify(URL, &request).await.unwrap();

        let sent = notifier.sender().sent();
        assert_eq!(sent.len(), 1);
        let (url, payload) = &sent[0];
        assert_eq!(url, URL);
        assert_eq!(
            *payload,
            json!({
                "username": "bitwatch",
                "embeds": [{
                    "title": "Transaction ff00",
                    "description": "Value: **2,500,000 sats**\nDirection: **out**",
                    "color": COLOR_OUT,
                    "timestamp": "2024-06-01T12:00:00.000Z",
                    "footer": {"text": "bitwatch"}
                }]
            })
        );
    }

    #[tokio::test]
    async fn returns_sender_response_unchanged() {
        let sender = RecordingSender::replying(|| Ok(ResponseBody::Json(json!({"id": "9"}))));
        let notifier = TransactionNotifier::new(sender).with_clock(clock());

        let body = notifier
            .notify(URL, &NotificationRequest::new("abc"))
            .await
            .unwrap();

        assert_eq!(body, ResponseBody::Json(json!({"id": "9"})));
    }

    #[tokio::test]
    async fn passes_status_errors_through() {
        let sender = RecordingSender::replying(|| {
            Err(WebhookError::Status {
                status: http::StatusCode::NOT_FOUND,
                body: ResponseBody::Json(json!({"error": "not found"})),
                unparsed_json: false,
            })
        });
        let notifier = TransactionNotifier::new(sender).with_clock(clock());

        let err = notifier
            .notify(URL, &NotificationRequest::new("abc"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::NOT_FOUND));
        assert_eq!(notifier.sender().sent().len(), 1);
    }

    #[tokio::test]
    async fn passes_transport_errors_through() {
        let sender = RecordingSender::replying(|| Err(HttpError::Timeout.into()));
        let notifier = TransactionNotifier::new(sender).with_clock(clock());

        let err = notifier
            .notify(URL, &NotificationRequest::new("abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, WebhookError::Transport(HttpError::Timeout)));
    }

    #[tokio::test]
    async fn avatar_url_is_added_when_configured() {
        let notifier = TransactionNotifier::new(RecordingSender::ok())
            .with_clock(clock())
            .with_avatar_url("https://x/bitwatch.png");

        notifier
            .notify(URL, &NotificationRequest::new("abc"))
            .await
            .unwrap();

        let (_, payload) = &notifier.sender().sent()[0];
        assert_eq!(payload["avatar_url"], "https://x/bitwatch.png");
    }

    #[tokio::test]
    async fn repeated_notifications_with_frozen_clock_are_identical() {
        let notifier = TransactionNotifier::new(RecordingSender::ok()).with_clock(clock());
        let request = NotificationRequest::new("abc").with_extra("Detected in mempool");

        notifier.notify(URL, &request).await.unwrap();
        notifier.notify(URL, &request).await.unwrap();

        let sent = notifier.sender().sent();
        assert_eq!(sent[0], sent[1]);
    }
}

mod with_real_sender {
    use super::*;
    use crate::webhook::{HttpClient, HttpRequest, HttpResponse, HttpWebhook};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(
                http::StatusCode::NO_CONTENT,
                http::HeaderMap::new(),
                vec![],
            ))
        }
    }

    #[tokio::test]
    async fn missing_url_fails_without_network_call() {
        let sender = HttpWebhook::new(CountingClient {
            calls: AtomicUsize::new(0),
        });
        let notifier = TransactionNotifier::new(sender);

        let err = notifier
            .notify("", &NotificationRequest::new("abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, WebhookError::MissingUrl));
        assert_eq!(notifier.sender().client().calls.load(Ordering::SeqCst), 0);
    }
}
