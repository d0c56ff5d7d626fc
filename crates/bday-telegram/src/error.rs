//! Error type for `bday-telegram`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// The Bot API answered with `"ok": false`.
  #[error("telegram api error {code}: {description}")]
  Api { code: i32, description: String },

  #[error("telegram {0} response carried no result")]
  MissingResult(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
