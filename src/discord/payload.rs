//! Discord webhook payload types.
//!
//! Field names match Discord's "Execute Webhook" JSON body. Optional
//! fields are omitted from the serialized output when unset.

use serde::{Deserialize, Serialize};

/// Top-level body POSTed to a Discord webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Display name override for the webhook message.
    pub username: String,

    /// Plain message text shown above the embeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Avatar override for the webhook message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Rich embeds; this crate always sends exactly one.
    pub embeds: Vec<Embed>,
}

/// A Discord rich embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    /// `0xRRGGBB` as an integer.
    pub color: u32,
    /// ISO-8601 timestamp rendered by the Discord client in local time.
    pub timestamp: String,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl WebhookPayload {
    /// Wraps a single embed with the given username.
    #[must_use]
    pub fn single(username: impl Into<String>, embed: Embed) -> Self {
        Self {
            username: username.into(),
            content: None,
            avatar_url: None,
            embeds: vec![embed],
        }
    }

    /// Sets the avatar override.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the plain message text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
