//! Async HTTP client for the Telegram Bot API.

use std::time::Duration;

use bday_core::{chat::ChatPlatform, user::PlatformId};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;

use crate::{
  Error, Result,
  types::{ApiResponse, Chat, Message},
};

/// Connection settings for the Bot API.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
  /// Base URL, normally `https://api.telegram.org`.
  pub api_url: String,
  pub token:   String,
  pub timeout: Duration,
}

/// Async client for the handful of Bot API methods the bot calls.
///
/// Cheap to clone, the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct TelegramClient {
  client: Client,
  config: TelegramConfig,
}

impl TelegramClient {
  pub fn new(config: TelegramConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self, method: &str) -> String {
    format!(
      "{}/bot{}/{}",
      self.config.api_url.trim_end_matches('/'),
      self.config.token,
      method
    )
  }

  async fn call<P, R>(&self, method: &'static str, params: &P) -> Result<R>
  where
    P: Serialize + ?Sized,
    R: DeserializeOwned,
  {
    tracing::debug!(method, "calling telegram");

    // Failed calls still answer with a JSON envelope, so the body is decoded
    // regardless of the HTTP status.
    let envelope: ApiResponse<R> = self
      .client
      .post(self.url(method))
      .json(params)
      .send()
      .await?
      .json()
      .await?;

    envelope.into_result(method).inspect_err(|e| {
      tracing::error!(method, error = %e, "telegram call failed");
    })
  }

  /// `getChat`: full information about a chat, including a user's bio.
  pub async fn get_chat(&self, chat_id: i64) -> Result<Chat> {
    self.call("getChat", &json!({ "chat_id": chat_id })).await
  }

  /// `sendMessage`: plain text, no parse mode.
  pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message> {
    self
      .call("sendMessage", &json!({ "chat_id": chat_id, "text": text }))
      .await
  }
}

impl ChatPlatform for TelegramClient {
  type Error = Error;

  async fn profile_bio(&self, user_id: PlatformId) -> Result<String> {
    Ok(self.get_chat(user_id).await?.bio.unwrap_or_default())
  }

  async fn send_text(&self, user_id: PlatformId, text: &str) -> Result<()> {
    self.send_message(user_id, text).await?;
    Ok(())
  }
}
