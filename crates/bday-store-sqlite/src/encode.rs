//! Conversions between domain types and SQLite column values.
//!
//! Birth dates are stored as `YYYY-MM-DD` text; `NULL` (or an empty string
//! left by older databases) means unknown.

use bday_core::{date::canonical, user::User};
use chrono::NaiveDate;

use crate::{Error, Result};

pub fn encode_date(date: NaiveDate) -> String { canonical(date) }

pub fn decode_date(s: &str) -> Result<Option<NaiveDate>> {
  if s.is_empty() {
    return Ok(None);
  }
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map(Some)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Column order of every `SELECT` against `users`.
pub const USER_COLUMNS: &str = "id, telegram_id, first_name, last_name, birth_date";

/// A `users` row as read from SQLite, before date decoding.
pub struct RawUser {
  pub id:          i64,
  pub telegram_id: i64,
  pub first_name:  String,
  pub last_name:   String,
  pub birth_date:  Option<String>,
}

impl RawUser {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      telegram_id: row.get(1)?,
      first_name:  row.get(2)?,
      last_name:   row.get(3)?,
      birth_date:  row.get(4)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    let birth_date = match self.birth_date.as_deref() {
      Some(s) => decode_date(s)?,
      None => None,
    };
    Ok(User {
      id: self.id,
      platform_id: self.telegram_id,
      first_name: self.first_name,
      last_name: self.last_name,
      birth_date,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_round_trip() {
    let date = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
    assert_eq!(encode_date(date), "1990-06-15");
    assert_eq!(decode_date("1990-06-15").unwrap(), Some(date));
  }

  #[test]
  fn empty_date_is_unknown() {
    assert_eq!(decode_date("").unwrap(), None);
  }

  #[test]
  fn garbage_date_is_an_error() {
    assert!(matches!(decode_date("15-06-1990"), Err(Error::DateParse(_))));
  }
}
