//! [`SqliteStore`], the SQLite implementation of [`BirthdayStore`].

use std::path::Path;

use bday_core::{
  store::BirthdayStore,
  subscription::{Subscription, Toggle},
  user::{NewUser, PlatformId, User},
};
use chrono::NaiveDate;
use rusqlite::{OptionalExtension as _, TransactionBehavior};

use crate::{
  Error, Result,
  encode::{RawUser, USER_COLUMNS, encode_date},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A user and subscription store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── BirthdayStore impl ──────────────────────────────────────────────────────

impl BirthdayStore for SqliteStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn find_user(&self, platform_id: PlatformId) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE telegram_id = ?1"),
            rusqlite::params![platform_id],
            RawUser::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn insert_user(&self, user: NewUser) -> Result<User> {
    let birth_date = user.birth_date.map(encode_date);

    let raw: RawUser = self
      .conn
      .call(move |conn| {
        // A concurrent /start for the same user may have won the race; keep
        // whichever row landed first.
        conn.execute(
          "INSERT INTO users (telegram_id, first_name, last_name, birth_date)
           VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT (telegram_id) DO NOTHING",
          rusqlite::params![
            user.platform_id,
            user.first_name,
            user.last_name,
            birth_date,
          ],
        )?;

        Ok(conn.query_row(
          &format!("SELECT {USER_COLUMNS} FROM users WHERE telegram_id = ?1"),
          rusqlite::params![user.platform_id],
          RawUser::from_row,
        )?)
      })
      .await?;

    raw.into_user()
  }

  async fn update_birth_date(&self, platform_id: PlatformId, birth_date: NaiveDate) -> Result<()> {
    let date_str = encode_date(birth_date);

    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE users SET birth_date = ?1 WHERE telegram_id = ?2",
          rusqlite::params![date_str, platform_id],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::UserNotFound(platform_id));
    }
    Ok(())
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    let raws: Vec<RawUser> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawUser::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawUser::into_user).collect()
  }

  // ── Subscriptions ─────────────────────────────────────────────────────────

  async fn subscription_exists(
    &self,
    subscriber_id:    PlatformId,
    subscribed_to_id: PlatformId,
  ) -> Result<bool> {
    let exists = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT 1 FROM subscriptions WHERE subscriber_id = ?1 AND subscribed_to_id = ?2",
            rusqlite::params![subscriber_id, subscribed_to_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false))
      })
      .await?;
    Ok(exists)
  }

  async fn create_subscription(
    &self,
    subscriber_id:    PlatformId,
    subscribed_to_id: PlatformId,
  ) -> Result<Subscription> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subscriptions (subscriber_id, subscribed_to_id) VALUES (?1, ?2)",
          rusqlite::params![subscriber_id, subscribed_to_id],
        )?;
        Ok(())
      })
      .await?;

    Ok(Subscription { subscriber_id, subscribed_to_id })
  }

  async fn delete_subscription(
    &self,
    subscriber_id:    PlatformId,
    subscribed_to_id: PlatformId,
  ) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM subscriptions WHERE subscriber_id = ?1 AND subscribed_to_id = ?2",
          rusqlite::params![subscriber_id, subscribed_to_id],
        )?)
      })
      .await?;
    Ok(removed > 0)
  }

  async fn toggle_subscription(
    &self,
    subscriber_id:    PlatformId,
    subscribed_to_id: PlatformId,
  ) -> Result<Toggle> {
    let toggle = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let removed = tx.execute(
          "DELETE FROM subscriptions WHERE subscriber_id = ?1 AND subscribed_to_id = ?2",
          rusqlite::params![subscriber_id, subscribed_to_id],
        )?;

        let toggle = if removed > 0 {
          Toggle::Unsubscribed
        } else {
          tx.execute(
            "INSERT INTO subscriptions (subscriber_id, subscribed_to_id) VALUES (?1, ?2)",
            rusqlite::params![subscriber_id, subscribed_to_id],
          )?;
          Toggle::Subscribed
        };

        tx.commit()?;
        Ok(toggle)
      })
      .await?;
    Ok(toggle)
  }
}
