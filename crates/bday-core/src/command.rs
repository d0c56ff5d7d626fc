//! Chat commands recognised by the bot.

use crate::{Error, Result, user::PlatformId};

/// A parsed inbound message.
///
/// Anything that is not one of the known keywords is [`Command::FreeText`]
/// and carries the whole original message, because free text is read as a
/// birthday submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// `/start`: register and try to discover the birthday from the bio.
  Start,
  /// `/allUser`: list every known user.
  ListAll,
  /// `/sub <platform id>`: toggle a subscription to that user.
  Subscribe(String),
  /// Anything else, including the empty message.
  FreeText(String),
}

impl Command {
  /// Split `text` on its first whitespace run into keyword and argument and
  /// classify it. Never fails.
  pub fn parse(text: &str) -> Self {
    let (keyword, argument) = match text.split_once(char::is_whitespace) {
      Some((keyword, rest)) => (keyword, rest.trim_start()),
      None => (text, ""),
    };

    match keyword {
      "/start" => Self::Start,
      "/allUser" => Self::ListAll,
      "/sub" => Self::Subscribe(argument.to_owned()),
      _ => Self::FreeText(text.to_owned()),
    }
  }
}

/// Parse the argument of `/sub` as a platform id.
pub fn parse_platform_id(text: &str) -> Result<PlatformId> {
  text
    .parse()
    .map_err(|e| Error::InvalidPlatformId(text.to_owned(), e))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_keywords() {
    assert_eq!(Command::parse("/start"), Command::Start);
    assert_eq!(Command::parse("/allUser"), Command::ListAll);
    assert_eq!(Command::parse("/sub 42"), Command::Subscribe("42".into()));
  }

  #[test]
  fn keyword_match_is_exact() {
    assert_eq!(Command::parse("/Start"), Command::FreeText("/Start".into()));
    assert_eq!(Command::parse("/alluser"), Command::FreeText("/alluser".into()));
    assert_eq!(Command::parse("/subscribe 42"), Command::FreeText("/subscribe 42".into()));
  }

  #[test]
  fn start_ignores_trailing_argument() {
    assert_eq!(Command::parse("/start deep-link-payload"), Command::Start);
  }

  #[test]
  fn whitespace_run_separates_argument() {
    assert_eq!(Command::parse("/sub   42"), Command::Subscribe("42".into()));
    assert_eq!(Command::parse("/sub\t42"), Command::Subscribe("42".into()));
    assert_eq!(Command::parse("/sub"), Command::Subscribe(String::new()));
  }

  #[test]
  fn free_text_keeps_whole_message() {
    assert_eq!(
      Command::parse("my birthday is 25-12-1985"),
      Command::FreeText("my birthday is 25-12-1985".into()),
    );
    assert_eq!(Command::parse("25-12-1985"), Command::FreeText("25-12-1985".into()));
    assert_eq!(Command::parse(""), Command::FreeText(String::new()));
  }

  #[test]
  fn platform_id_parsing() {
    assert_eq!(parse_platform_id("42").unwrap(), 42);
    assert_eq!(parse_platform_id("-100123").unwrap(), -100123);
    assert!(matches!(
      parse_platform_id("abc"),
      Err(Error::InvalidPlatformId(s, _)) if s == "abc"
    ));
    assert!(parse_platform_id("").is_err());
    assert!(parse_platform_id("42 43").is_err());
  }
}
