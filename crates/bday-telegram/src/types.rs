//! Bot API object types (the subset the bot reads).
//!
//! Unknown fields are ignored, and everything not strictly needed is
//! optional so that updates the bot does not care about (edited messages,
//! channel posts, stickers) still decode.

use bday_core::user::{PlatformId, Sender};
use serde::{Deserialize, Serialize};

/// One webhook delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
  pub update_id: i64,
  #[serde(default)]
  pub message:   Option<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  #[serde(default)]
  pub message_id: i64,
  #[serde(default)]
  pub from:       Option<TgUser>,
  #[serde(default)]
  pub chat:       Option<Chat>,
  /// Unix time the message was sent.
  #[serde(default)]
  pub date:       i64,
  #[serde(default)]
  pub text:       Option<String>,
}

impl Message {
  /// The author of the message, if the message has one (channel posts
  /// don't).
  pub fn sender(&self) -> Option<Sender> {
    self.from.as_ref().map(|from| Sender {
      id:         from.id,
      first_name: from.first_name.clone(),
      last_name:  from.last_name.clone().unwrap_or_default(),
    })
  }
}

/// A Telegram user or bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgUser {
  pub id:            PlatformId,
  #[serde(default)]
  pub is_bot:        bool,
  #[serde(default)]
  pub first_name:    String,
  #[serde(default)]
  pub last_name:     Option<String>,
  #[serde(default)]
  pub username:      Option<String>,
  #[serde(default)]
  pub language_code: Option<String>,
}

/// A chat. `getChat` fills in `bio` for private chats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
  pub id:         i64,
  #[serde(rename = "type", default)]
  pub kind:       String,
  #[serde(default)]
  pub first_name: Option<String>,
  #[serde(default)]
  pub last_name:  Option<String>,
  #[serde(default)]
  pub username:   Option<String>,
  #[serde(default)]
  pub bio:        Option<String>,
}

/// The envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
  pub ok:          bool,
  pub result:      Option<T>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub error_code:  Option<i32>,
}

impl<T> ApiResponse<T> {
  pub fn into_result(self, method: &'static str) -> crate::Result<T> {
    if !self.ok {
      return Err(crate::Error::Api {
        code:        self.error_code.unwrap_or_default(),
        description: self.description.unwrap_or_default(),
      });
    }
    self.result.ok_or(crate::Error::MissingResult(method))
  }
}
