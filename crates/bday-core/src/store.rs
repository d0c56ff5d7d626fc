//! The `BirthdayStore` trait.
//!
//! Implemented by storage backends (e.g. `bday-store-sqlite`). The bot
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::{
  subscription::{Subscription, Toggle},
  user::{NewUser, PlatformId, User},
};

/// Abstraction over the persistent user and subscription state.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait BirthdayStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Look a user up by platform id. Returns `None` if unknown.
  fn find_user(
    &self,
    platform_id: PlatformId,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Persist a new user and return the stored record.
  ///
  /// If a user with the same platform id already exists it is left
  /// untouched and returned instead.
  fn insert_user(
    &self,
    user: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Overwrite a user's birth date. Errors if no such user exists.
  fn update_birth_date(
    &self,
    platform_id: PlatformId,
    birth_date: NaiveDate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Every user, in whatever order the backend yields them.
  fn list_users(&self) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  // ── Subscriptions ─────────────────────────────────────────────────────

  fn subscription_exists(
    &self,
    subscriber_id: PlatformId,
    subscribed_to_id: PlatformId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Record that `subscriber_id` follows `subscribed_to_id`.
  fn create_subscription(
    &self,
    subscriber_id: PlatformId,
    subscribed_to_id: PlatformId,
  ) -> impl Future<Output = Result<Subscription, Self::Error>> + Send + '_;

  /// Remove the edge. Returns `false` if there was nothing to remove.
  fn delete_subscription(
    &self,
    subscriber_id: PlatformId,
    subscribed_to_id: PlatformId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Flip the edge as one atomic operation: delete it if present,
  /// create it otherwise. Returns the resulting state.
  fn toggle_subscription(
    &self,
    subscriber_id: PlatformId,
    subscribed_to_id: PlatformId,
  ) -> impl Future<Output = Result<Toggle, Self::Error>> + Send + '_;
}
