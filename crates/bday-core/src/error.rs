//! Error types for `bday-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid platform id {0:?}: {1}")]
  InvalidPlatformId(String, #[source] std::num::ParseIntError),

  #[error("no valid date found in {0:?}")]
  NoDateFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
