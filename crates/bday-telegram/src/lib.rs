//! Telegram Bot API integration for the birthday bot.
//!
//! [`TelegramClient`] implements [`bday_core::chat::ChatPlatform`] over the
//! HTTPS Bot API; [`types`] holds the webhook payload types the server
//! decodes inbound updates into.

mod client;

pub mod error;
pub mod types;

pub use client::{TelegramClient, TelegramConfig};
pub use error::{Error, Result};
