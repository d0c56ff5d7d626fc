//! Test doubles shared by the unit tests of this crate.

use std::{
  collections::HashMap,
  sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
  },
};

use bday_core::{chat::ChatPlatform, user::PlatformId};
use bday_store_sqlite::SqliteStore;

use crate::Bot;

#[derive(Debug, thiserror::Error)]
#[error("fake chat failure")]
pub struct FakeChatError;

/// An in-process chat platform: bios are seeded by the test, sent messages
/// are recorded. A user with no seeded bio makes `profile_bio` fail.
#[derive(Clone, Default)]
pub struct FakeChat {
  bios:       Arc<Mutex<HashMap<PlatformId, String>>>,
  sent:       Arc<Mutex<Vec<(PlatformId, String)>>>,
  fail_sends: Arc<AtomicBool>,
}

impl FakeChat {
  pub fn set_bio(&self, user_id: PlatformId, bio: &str) {
    self.bios.lock().unwrap().insert(user_id, bio.to_owned());
  }

  pub fn fail_sends(&self) { self.fail_sends.store(true, Ordering::SeqCst); }

  pub fn sent(&self) -> Vec<(PlatformId, String)> { self.sent.lock().unwrap().clone() }

  pub fn sent_to(&self, user_id: PlatformId) -> Vec<String> {
    self
      .sent()
      .into_iter()
      .filter(|(id, _)| *id == user_id)
      .map(|(_, text)| text)
      .collect()
  }
}

impl ChatPlatform for FakeChat {
  type Error = FakeChatError;

  async fn profile_bio(&self, user_id: PlatformId) -> Result<String, FakeChatError> {
    self.bios.lock().unwrap().get(&user_id).cloned().ok_or(FakeChatError)
  }

  async fn send_text(&self, user_id: PlatformId, text: &str) -> Result<(), FakeChatError> {
    if self.fail_sends.load(Ordering::SeqCst) {
      return Err(FakeChatError);
    }
    self.sent.lock().unwrap().push((user_id, text.to_owned()));
    Ok(())
  }
}

/// A bot over an empty in-memory store and a fresh [`FakeChat`].
pub async fn bot() -> (Bot<SqliteStore, FakeChat>, FakeChat) {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  let chat = FakeChat::default();
  (Bot::new(Arc::new(store), Arc::new(chat.clone())), chat)
}
