//! The `ChatPlatform` trait: the two chat operations the bot needs.

use std::future::Future;

use crate::user::PlatformId;

/// A chat platform client (e.g. the Telegram Bot API).
pub trait ChatPlatform: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The free-form bio on the user's profile. An unset bio is the empty
  /// string.
  fn profile_bio(
    &self,
    user_id: PlatformId,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  /// Send a plain text message to the user.
  fn send_text<'a>(
    &'a self,
    user_id: PlatformId,
    text: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
