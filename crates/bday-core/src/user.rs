//! User: one chat participant known to the bot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The stable identifier the chat platform assigns to an end user.
pub type PlatformId = i64;

/// A persisted user record.
///
/// A user whose `birth_date` is `None` is "incomplete" and eligible for the
/// birthday-discovery flow on `/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  /// Store-assigned row id.
  pub id:          i64,
  pub platform_id: PlatformId,
  pub first_name:  String,
  pub last_name:   String,
  pub birth_date:  Option<NaiveDate>,
}

impl User {
  pub fn is_complete(&self) -> bool { self.birth_date.is_some() }
}

/// Input to [`BirthdayStore::insert_user`](crate::store::BirthdayStore::insert_user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub platform_id: PlatformId,
  pub first_name:  String,
  pub last_name:   String,
  pub birth_date:  Option<NaiveDate>,
}

impl NewUser {
  /// A user seen for the first time, birthday not yet known.
  pub fn incomplete(sender: &Sender) -> Self {
    Self {
      platform_id: sender.id,
      first_name:  sender.first_name.clone(),
      last_name:   sender.last_name.clone(),
      birth_date:  None,
    }
  }
}

/// The author of an inbound message, as decoded from the webhook payload.
///
/// Built once per request and passed by reference into dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
  pub id:         PlatformId,
  pub first_name: String,
  pub last_name:  String,
}
