//! `/sub <id>`: toggle a birthday subscription.

use bday_core::{
  chat::ChatPlatform,
  command::parse_platform_id,
  store::BirthdayStore,
  subscription::Toggle,
  user::PlatformId,
};

use crate::{Bot, error::Error};

/// Flip `subscriber_id`'s subscription to the user named by `target`.
///
/// Sends no reply. A malformed id is a validation error and an unknown
/// target is [`Error::NotFound`]; neither touches the store.
pub async fn handler<S, C>(
  bot:           &Bot<S, C>,
  subscriber_id: PlatformId,
  target:        &str,
) -> Result<Toggle, Error>
where
  S: BirthdayStore,
  C: ChatPlatform,
{
  let target_id = parse_platform_id(target)?;

  bot
    .store
    .find_user(target_id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(target_id))?;

  let toggle = bot
    .store
    .toggle_subscription(subscriber_id, target_id)
    .await
    .map_err(Error::store)?;
  tracing::info!(subscriber_id, target_id, ?toggle, "subscription toggled");

  Ok(toggle)
}

#[cfg(test)]
mod tests {
  use bday_core::{store::BirthdayStore as _, user::NewUser};

  use super::*;
  use crate::testing;

  async fn with_user(id: PlatformId) -> (Bot<bday_store_sqlite::SqliteStore, testing::FakeChat>, testing::FakeChat) {
    let (bot, chat) = testing::bot().await;
    bot
      .store
      .insert_user(NewUser {
        platform_id: id,
        first_name:  "Target".into(),
        last_name:   String::new(),
        birth_date:  None,
      })
      .await
      .unwrap();
    (bot, chat)
  }

  #[tokio::test]
  async fn toggle_twice_restores_state() {
    let (bot, chat) = with_user(42).await;

    assert_eq!(handler(&bot, 7, "42").await.unwrap(), Toggle::Subscribed);
    assert!(bot.store.subscription_exists(7, 42).await.unwrap());

    assert_eq!(handler(&bot, 7, "42").await.unwrap(), Toggle::Unsubscribed);
    assert!(!bot.store.subscription_exists(7, 42).await.unwrap());

    assert!(chat.sent().is_empty());
  }

  #[tokio::test]
  async fn unknown_target_is_not_found() {
    let (bot, _chat) = with_user(42).await;

    let result = handler(&bot, 7, "999").await;
    assert!(matches!(result, Err(Error::NotFound(999))));
    assert!(!bot.store.subscription_exists(7, 999).await.unwrap());
  }

  #[tokio::test]
  async fn malformed_target_is_validation_error() {
    let (bot, _chat) = with_user(42).await;

    for target in ["", "abc", "42abc", "4 2"] {
      let result = handler(&bot, 7, target).await;
      assert!(
        matches!(result, Err(Error::Validation(bday_core::Error::InvalidPlatformId(..)))),
        "target {target:?}: {result:?}"
      );
    }
    assert!(!bot.store.subscription_exists(7, 42).await.unwrap());
  }

  #[tokio::test]
  async fn subscriber_need_not_be_registered() {
    let (bot, _chat) = with_user(42).await;
    assert_eq!(handler(&bot, 12345, "42").await.unwrap(), Toggle::Subscribed);
  }

  #[tokio::test]
  async fn self_subscription_is_permitted() {
    let (bot, _chat) = with_user(42).await;
    assert_eq!(handler(&bot, 42, "42").await.unwrap(), Toggle::Subscribed);
  }
}
