//! Webhook layer for posting JSON payloads to external services.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`], [`ResponseBody`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-shot webhook delivery ([`WebhookSender`], [`HttpWebhook`])

mod body;
mod client;
mod error;
mod http;
mod sender;


pub use body::ResponseBody;
pub use client::ReqwestClient;
pub use error::{ErrorKind, HttpError, WebhookError};
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{HttpWebhook, USER_AGENT, WebhookSender};
