//! Discord transaction notifications.
//!
//! This module provides:
//! - Transaction input types ([`NotificationRequest`], [`Direction`])
//! - Discord payload types ([`WebhookPayload`], [`Embed`])
//! - Pure embed formatting ([`build_payload`])
//! - Delivery through any [`WebhookSender`](crate::webhook::WebhookSender)
//!   ([`TransactionNotifier`])

mod format;
mod notifier;
mod payload;
mod transaction;

#[cfg(test)]
mod notifier_tests;

pub use format::{
    COLOR_IN, COLOR_OTHER, COLOR_OUT, FOOTER_TEXT, USERNAME, build_payload, color_for,
    group_thousands,
};
pub use notifier::TransactionNotifier;
pub use payload::{Embed, EmbedFooter, WebhookPayload};
pub use transaction::{Direction, NotificationRequest, ParseDirectionError};
