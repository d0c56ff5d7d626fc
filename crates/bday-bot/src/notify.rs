//! Outbound replies to users.

use std::sync::Arc;

use bday_core::{
  chat::ChatPlatform,
  user::{PlatformId, Sender},
};

use crate::error::Error;

pub const BIRTHDAY_FOUND: &str =
  "We found your birthday in your bio, hopefully it is correct!";
pub const BIRTHDAY_NOT_FOUND: &str = "We could not find your birthday in your bio.";
pub const REQUEST_BIRTHDAY: &str = "Please send your birthday in DD-MM-YYYY format.";
pub const BIRTHDAY_SAVED: &str = "Thank you. Your birthday has been saved.";

pub fn welcome(sender: &Sender) -> String {
  format!(
    "Welcome, {} {}! This bot keeps track of your colleagues' birthdays.\n\
     /allUser - all colleagues\n\
     /sub <id> - subscribe to (or unsubscribe from) a colleague's birthday",
    sender.first_name, sender.last_name
  )
}

/// Sends text replies through a [`ChatPlatform`].
///
/// A failed send is logged and returned as [`Error::Upstream`]; it is never
/// retried.
pub struct Notifier<C> {
  chat: Arc<C>,
}

impl<C> Clone for Notifier<C> {
  fn clone(&self) -> Self { Self { chat: Arc::clone(&self.chat) } }
}

impl<C: ChatPlatform> Notifier<C> {
  pub fn new(chat: Arc<C>) -> Self { Self { chat } }

  pub async fn send(&self, user_id: PlatformId, text: &str) -> Result<(), Error> {
    self.chat.send_text(user_id, text).await.map_err(|e| {
      tracing::error!(user_id, error = %e, "failed to send message");
      Error::upstream(e)
    })
  }

  pub async fn welcome(&self, sender: &Sender) -> Result<(), Error> {
    self.send(sender.id, &welcome(sender)).await
  }

  pub async fn birthday_found(&self, user_id: PlatformId) -> Result<(), Error> {
    self.send(user_id, BIRTHDAY_FOUND).await
  }

  pub async fn birthday_not_found(&self, user_id: PlatformId) -> Result<(), Error> {
    self.send(user_id, BIRTHDAY_NOT_FOUND).await
  }

  pub async fn request_birthday(&self, user_id: PlatformId) -> Result<(), Error> {
    self.send(user_id, REQUEST_BIRTHDAY).await
  }

  pub async fn birthday_saved(&self, user_id: PlatformId) -> Result<(), Error> {
    self.send(user_id, BIRTHDAY_SAVED).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::FakeChat;

  fn sender() -> Sender {
    Sender { id: 42, first_name: "Ada".into(), last_name: "Lovelace".into() }
  }

  #[test]
  fn welcome_names_the_sender() {
    let text = welcome(&sender());
    assert!(text.starts_with("Welcome, Ada Lovelace!"), "{text}");
    assert!(text.contains("/allUser"));
  }

  #[tokio::test]
  async fn send_goes_to_the_addressed_user() {
    let chat = FakeChat::default();
    let notifier = Notifier::new(Arc::new(chat.clone()));

    notifier.request_birthday(42).await.unwrap();
    notifier.birthday_saved(7).await.unwrap();

    assert_eq!(chat.sent(), vec![
      (42, REQUEST_BIRTHDAY.to_string()),
      (7, BIRTHDAY_SAVED.to_string()),
    ]);
  }

  #[tokio::test]
  async fn failed_send_is_upstream_error() {
    let chat = FakeChat::default();
    chat.fail_sends();
    let notifier = Notifier::new(Arc::new(chat));

    assert!(matches!(notifier.welcome(&sender()).await, Err(Error::Upstream(_))));
  }
}
