//! Runtime configuration.
//!
//! Layered lowest to highest: built-in defaults, the optional TOML file,
//! then `BDAY_*` environment variables (e.g. `BDAY_TELEGRAM_TOKEN`). A
//! `.env` file, if present, is loaded into the environment by the binary
//! before this runs.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use bday_telegram::TelegramConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Deserialize, Clone)]
pub struct BotConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  pub webhook_path:         String,
  pub telegram_token:       String,
  pub telegram_api_url:     String,
  pub request_timeout_secs: u64,
}

impl BotConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix("BDAY")),
    )
  }

  fn from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
  ) -> Result<Self, ConfigError> {
    let cfg: Self = builder
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8080)?
      .set_default("store_path", "Date.db")?
      .set_default("webhook_path", "/telegram-webhook")?
      .set_default("telegram_token", "")?
      .set_default("telegram_api_url", "https://api.telegram.org")?
      .set_default("request_timeout_secs", 30)?
      .build()?
      .try_deserialize()?;

    if cfg.telegram_token.is_empty() {
      return Err(ConfigError::Message(
        "telegram_token is not set (BDAY_TELEGRAM_TOKEN)".to_string(),
      ));
    }
    if !cfg.webhook_path.starts_with('/') {
      return Err(ConfigError::Message(format!(
        "webhook_path must start with '/', got {:?}",
        cfg.webhook_path
      )));
    }
    Ok(cfg)
  }

  pub fn telegram(&self) -> TelegramConfig {
    TelegramConfig {
      api_url: self.telegram_api_url.clone(),
      token:   self.telegram_token.clone(),
      timeout: Duration::from_secs(self.request_timeout_secs),
    }
  }
}

#[cfg(test)]
mod tests {
  use config::FileFormat;

  use super::*;

  fn from_toml(toml: &str) -> Result<BotConfig, ConfigError> {
    BotConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
  }

  #[test]
  fn defaults_fill_everything_but_the_token() {
    let cfg = from_toml(r#"telegram_token = "123:abc""#).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("Date.db"));
    assert_eq!(cfg.webhook_path, "/telegram-webhook");
    assert_eq!(cfg.telegram_api_url, "https://api.telegram.org");
    assert_eq!(cfg.telegram().timeout, Duration::from_secs(30));
    assert_eq!(cfg.telegram().token, "123:abc");
  }

  #[test]
  fn file_values_override_defaults() {
    let cfg = from_toml(
      r#"
      host = "127.0.0.1"
      port = 9000
      store_path = "/var/lib/bday/bday.db"
      webhook_path = "/hook"
      telegram_token = "t"
      request_timeout_secs = 5
      "#,
    )
    .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/bday/bday.db"));
    assert_eq!(cfg.webhook_path, "/hook");
    assert_eq!(cfg.telegram().timeout, Duration::from_secs(5));
  }

  #[test]
  fn missing_token_is_rejected() {
    assert!(from_toml("").is_err());
  }

  #[test]
  fn relative_webhook_path_is_rejected() {
    assert!(from_toml("telegram_token = \"t\"\nwebhook_path = \"hook\"").is_err());
  }

  #[test]
  fn missing_file_is_not_an_error_by_itself() {
    let builder = Config::builder()
      .add_source(File::from(Path::new("/nonexistent/bday.toml")).required(false));
    match BotConfig::from_builder(builder) {
      Err(ConfigError::Message(msg)) => assert!(msg.contains("telegram_token"), "{msg}"),
      Err(e) => panic!("unexpected error: {e}"),
      Ok(_) => panic!("config without a token was accepted"),
    }
  }
}
