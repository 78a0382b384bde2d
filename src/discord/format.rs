//! Pure formatting of transactions into Discord payloads.

use chrono::{DateTime, SecondsFormat, Utc};

use super::payload::{Embed, EmbedFooter, WebhookPayload};
use super::transaction::{Direction, NotificationRequest};

/// Username shown on every message.
pub const USERNAME: &str = "bitwatch";

/// Footer text on every embed.
pub const FOOTER_TEXT: &str = "bitwatch";

/// Embed color for incoming transactions (green).
pub const COLOR_IN: u32 = 0x2E_CC_71;

/// Embed color for outgoing transactions (red).
pub const COLOR_OUT: u32 = 0xE7_4C_3C;

/// Embed color when the direction is unknown or absent (blue).
pub const COLOR_OTHER: u32 = 0x34_98_DB;

/// Builds the webhook payload for `request`, stamped with `now`.
///
/// Deterministic: identical inputs produce identical payloads.
#[must_use]
pub fn build_payload(request: &NotificationRequest, now: DateTime<Utc>) -> WebhookPayload {
    let embed = Embed {
        title: format!("Transaction {}", request.txid),
        description: describe(request),
        color: color_for(request.direction),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        footer: EmbedFooter {
            text: FOOTER_TEXT.to_string(),
        },
    };

    WebhookPayload::single(USERNAME, embed)
}

/// Returns the embed color for a direction.
#[must_use]
pub const fn color_for(direction: Option<Direction>) -> u32 {
    match direction {
        Some(Direction::In) => COLOR_IN,
        Some(Direction::Out) => COLOR_OUT,
        Some(Direction::Unknown) | None => COLOR_OTHER,
    }
}

/// Renders the description lines in their fixed order, skipping absent fields.
fn describe(request: &NotificationRequest) -> String {
    let lines = [
        non_empty(request.address.as_deref()).map(|a| format!("Address: `{a}`")),
        request
            .value_sats
            .map(|v| format!("Value: **{} sats**", group_thousands(v))),
        request.direction.map(|d| format!("Direction: **{d}**")),
        non_empty(request.link.as_deref()).map(|l| format!("[View on mempool.space]({l})")),
        non_empty(request.extra.as_deref()).map(ToString::to_string),
    ];

    lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Formats `n` with `,` between each group of three digits.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
