//! Free text: the sender submitting their birthday by hand.

use bday_core::{
  chat::ChatPlatform,
  date::{canonical, normalize},
  store::BirthdayStore,
  user::PlatformId,
};

use crate::{Bot, error::Error};

/// Read a birthday out of `text` and store it, overwriting any earlier one.
///
/// Unreadable text gets the format prompt and a [`Error::Validation`]; the
/// store is not touched. The user must already exist (`/start`).
pub async fn handler<S, C>(bot: &Bot<S, C>, sender_id: PlatformId, text: &str) -> Result<(), Error>
where
  S: BirthdayStore,
  C: ChatPlatform,
{
  let Some(birth_date) = normalize(text) else {
    bot.notifier.request_birthday(sender_id).await?;
    return Err(bday_core::Error::NoDateFound(text.to_owned()).into());
  };

  bot
    .store
    .update_birth_date(sender_id, birth_date)
    .await
    .map_err(Error::store)?;
  tracing::info!(user_id = sender_id, birth_date = %canonical(birth_date), "birthday recorded");

  bot.notifier.birthday_saved(sender_id).await
}
