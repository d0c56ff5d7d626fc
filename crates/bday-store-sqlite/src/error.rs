//! Error type for `bday-store-sqlite`.

use bday_core::user::PlatformId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// An update matched no row.
  #[error("no user found with platform id {0}")]
  UserNotFound(PlatformId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
