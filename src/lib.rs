//! bitwatch-notify: Discord notifications for bitcoin transactions
//!
//! A library for posting transaction alerts to Discord webhooks, with a
//! generic JSON webhook sender underneath.

pub mod config;
pub mod discord;
pub mod time;
pub mod webhook;
