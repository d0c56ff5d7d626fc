//! `/allUser`: the user directory.

use bday_core::{
  chat::ChatPlatform,
  date::canonical,
  store::BirthdayStore,
  user::{PlatformId, User},
};

use crate::{Bot, error::Error};

/// One line per user, in store order. No users renders as the empty string.
pub fn render(users: &[User]) -> String {
  users
    .iter()
    .map(|user| {
      format!(
        "ID: {}, TelegramID: {}, FirstName: {}, LastName: {}, BirthDate: {}",
        user.id,
        user.platform_id,
        user.first_name,
        user.last_name,
        user.birth_date.map(canonical).unwrap_or_default(),
      )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Send the full directory to `requester_id` as a single message.
pub async fn handler<S, C>(bot: &Bot<S, C>, requester_id: PlatformId) -> Result<(), Error>
where
  S: BirthdayStore,
  C: ChatPlatform,
{
  let users = bot.store.list_users().await.map_err(Error::store)?;
  tracing::debug!(user_id = requester_id, count = users.len(), "listing users");
  bot.notifier.send(requester_id, &render(&users)).await
}
