//! Webhook server for the birthday bot.
//!
//! Exposes an axum [`Router`] that accepts Telegram webhook deliveries and
//! hands each text message to [`commands::dispatch`], backed by any
//! [`BirthdayStore`] and [`ChatPlatform`].

pub mod commands;
pub mod config;
pub mod error;
pub mod notify;

#[cfg(test)]
mod testing;

pub use config::BotConfig;
pub use error::Error;

use std::{future::Future, sync::Arc, time::Duration};

use axum::{Router, extract::State, http::StatusCode, routing::post};
use bday_core::{chat::ChatPlatform, store::BirthdayStore};
use bday_telegram::types::Update;
use bytes::Bytes;
use tokio::{net::TcpListener, sync::Notify};
use tower_http::trace::TraceLayer;

use notify::Notifier;

// ─── Bot ──────────────────────────────────────────────────────────────────────

/// Everything a use case needs, shared by all requests.
///
/// Holds no per-request data: the sender and message text are passed into
/// [`commands::dispatch`] for each delivery.
pub struct Bot<S, C> {
  pub store:    Arc<S>,
  pub chat:     Arc<C>,
  pub notifier: Notifier<C>,
}

impl<S, C: ChatPlatform> Bot<S, C> {
  pub fn new(store: Arc<S>, chat: Arc<C>) -> Self {
    let notifier = Notifier::new(Arc::clone(&chat));
    Self { store, chat, notifier }
  }
}

impl<S, C> Clone for Bot<S, C> {
  fn clone(&self) -> Self {
    Self {
      store:    Arc::clone(&self.store),
      chat:     Arc::clone(&self.chat),
      notifier: self.notifier.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] serving the webhook at `webhook_path`.
pub fn router<S, C>(bot: Bot<S, C>, webhook_path: &str) -> Router
where
  S: BirthdayStore + 'static,
  C: ChatPlatform + 'static,
{
  Router::new()
    .route(webhook_path, post(webhook_handler::<S, C>))
    .layer(TraceLayer::new_for_http())
    .with_state(bot)
}

/// `POST <webhook_path>`: one Telegram update.
///
/// Updates that carry no text message from a user (edits, channel posts,
/// stickers, service messages) are acknowledged and ignored.
async fn webhook_handler<S, C>(
  State(bot): State<Bot<S, C>>,
  body: Bytes,
) -> Result<StatusCode, Error>
where
  S: BirthdayStore + 'static,
  C: ChatPlatform + 'static,
{
  let update: Update = serde_json::from_slice(&body).inspect_err(|e| {
    tracing::warn!(error = %e, "could not decode update");
  })?;

  let Some(message) = update.message else {
    tracing::debug!(update_id = update.update_id, "ignoring update without message");
    return Ok(StatusCode::OK);
  };
  let (Some(sender), Some(text)) = (message.sender(), message.text.as_deref()) else {
    tracing::debug!(update_id = update.update_id, "ignoring message without sender or text");
    return Ok(StatusCode::OK);
  };
  if text.is_empty() {
    return Ok(StatusCode::OK);
  }

  commands::dispatch(&bot, &sender, text).await?;
  Ok(StatusCode::OK)
}

// ─── Server ───────────────────────────────────────────────────────────────────

/// Serve `app` until `shutdown` resolves, then let in-flight requests finish
/// for at most `grace` before returning anyway.
pub async fn serve<F>(
  listener: TcpListener,
  app: Router,
  shutdown: F,
  grace: Duration,
) -> std::io::Result<()>
where
  F: Future<Output = ()> + Send + 'static,
{
  let signalled = Arc::new(Notify::new());
  let notify = Arc::clone(&signalled);

  let server = axum::serve(listener, app)
    .with_graceful_shutdown(async move {
      shutdown.await;
      notify.notify_one();
    })
    .into_future();
  tokio::pin!(server);

  tokio::select! {
    result = &mut server => result,
    _ = async {
      signalled.notified().await;
      tokio::time::sleep(grace).await;
    } => {
      tracing::warn!(?grace, "in-flight requests still running, forcing shutdown");
      Ok(())
    }
  }
}

// ─── Integration tests ────────────────────────────────────────────────────────
