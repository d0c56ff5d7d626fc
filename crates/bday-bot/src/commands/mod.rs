//! Command dispatch and the use case behind each command.
//!
//! | Command | Handler | Reply |
//! |---------|---------|-------|
//! | `/start` | [`start`] | welcome, birthday found / not found |
//! | `/allUser` | [`all_users`] | the user directory |
//! | `/sub <id>` | [`subscribe`] | none |
//! | anything else | [`birthday`] | confirmation or format prompt |

pub mod all_users;
pub mod birthday;
pub mod start;
pub mod subscribe;

use bday_core::{chat::ChatPlatform, command::Command, store::BirthdayStore, user::Sender};

use crate::{Bot, error::Error};

/// Interpret `text` from `sender` and run the matching use case.
///
/// Never rejects input: unknown commands are read as a birthday. Errors
/// are logged here and returned unchanged.
pub async fn dispatch<S, C>(bot: &Bot<S, C>, sender: &Sender, text: &str) -> Result<(), Error>
where
  S: BirthdayStore,
  C: ChatPlatform,
{
  let command = Command::parse(text);
  tracing::debug!(user_id = sender.id, ?command, "dispatching");

  let result = match &command {
    Command::Start => start::handler(bot, sender).await,
    Command::ListAll => all_users::handler(bot, sender.id).await,
    Command::Subscribe(target) => subscribe::handler(bot, sender.id, target).await.map(drop),
    Command::FreeText(text) => birthday::handler(bot, sender.id, text).await,
  };

  if let Err(e) = &result {
    match e {
      Error::Validation(_) | Error::NotFound(_) => {
        tracing::warn!(user_id = sender.id, ?command, error = %e, "command rejected")
      }
      _ => tracing::error!(user_id = sender.id, ?command, error = %e, "command failed"),
    }
  }
  result
}

#[cfg(test)]
mod tests {
  use bday_core::store::BirthdayStore as _;

  use super::*;
  use crate::{notify, testing};

  fn sender(id: i64) -> Sender {
    Sender { id, first_name: "Test".into(), last_name: "User".into() }
  }

  #[tokio::test]
  async fn start_routes_to_onboarding() {
    let (bot, chat) = testing::bot().await;
    chat.set_bio(42, "");

    dispatch(&bot, &sender(42), "/start").await.unwrap();
    assert!(bot.store.find_user(42).await.unwrap().is_some());
  }

  #[tokio::test]
  async fn all_user_routes_to_directory() {
    let (bot, chat) = testing::bot().await;
    chat.set_bio(1, "");
    dispatch(&bot, &sender(1), "/start").await.unwrap();

    dispatch(&bot, &sender(9), "/allUser").await.unwrap();
    let listing = chat.sent_to(9);
    assert_eq!(listing.len(), 1);
    assert!(listing[0].contains("TelegramID: 1,"), "{}", listing[0]);
  }

  #[tokio::test]
  async fn sub_routes_to_toggle_without_reply() {
    let (bot, chat) = testing::bot().await;
    chat.set_bio(42, "");
    dispatch(&bot, &sender(42), "/start").await.unwrap();

    dispatch(&bot, &sender(7), "/sub 42").await.unwrap();
    assert!(bot.store.subscription_exists(7, 42).await.unwrap());
    assert!(chat.sent_to(7).is_empty());
  }

  #[tokio::test]
  async fn mistyped_command_is_read_as_birthday() {
    let (bot, chat) = testing::bot().await;

    let result = dispatch(&bot, &sender(42), "/strat").await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(chat.sent_to(42), vec![notify::REQUEST_BIRTHDAY.to_string()]);
  }

  #[tokio::test]
  async fn empty_text_is_read_as_birthday() {
    let (bot, chat) = testing::bot().await;

    let result = dispatch(&bot, &sender(42), "").await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(chat.sent_to(42), vec![notify::REQUEST_BIRTHDAY.to_string()]);
  }
}
