//! `/start`: onboarding.
//!
//! Registers the sender on first contact, then, while their birthday is
//! unknown, looks for one in their profile bio.

use bday_core::{
  chat::ChatPlatform,
  date::{canonical, normalize},
  store::BirthdayStore,
  user::{NewUser, Sender},
};

use crate::{Bot, error::Error};

pub async fn handler<S, C>(bot: &Bot<S, C>, sender: &Sender) -> Result<(), Error>
where
  S: BirthdayStore,
  C: ChatPlatform,
{
  let user = match bot.store.find_user(sender.id).await.map_err(Error::store)? {
    Some(user) => user,
    None => {
      bot.notifier.welcome(sender).await?;
      let user = bot
        .store
        .insert_user(NewUser::incomplete(sender))
        .await
        .map_err(Error::store)?;
      tracing::info!(user_id = sender.id, id = user.id, "registered new user");
      user
    }
  };

  if user.is_complete() {
    return Ok(());
  }

  let bio = bot.chat.profile_bio(sender.id).await.map_err(|e| {
    tracing::error!(user_id = sender.id, error = %e, "failed to fetch profile bio");
    Error::upstream(e)
  })?;

  match normalize(&bio) {
    Some(birth_date) => {
      bot
        .store
        .update_birth_date(sender.id, birth_date)
        .await
        .map_err(Error::store)?;
      tracing::info!(
        user_id = sender.id,
        birth_date = %canonical(birth_date),
        "birthday found in bio"
      );
      bot.notifier.birthday_found(sender.id).await
    }
    None => {
      tracing::debug!(user_id = sender.id, "no birthday in bio");
      bot.notifier.birthday_not_found(sender.id).await?;
      bot.notifier.request_birthday(sender.id).await
    }
  }
}
