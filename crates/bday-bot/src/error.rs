//! Error types and axum `IntoResponse` implementation.
//!
//! The transport only distinguishes "could not decode the update" (400)
//! from "handling the update failed" (500); the specific kind is logged,
//! never sent back to Telegram.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use bday_core::user::PlatformId;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed update: {0}")]
  Decode(#[from] serde_json::Error),
  /// Unreadable birthday or subscription target.
  #[error("invalid input: {0}")]
  Validation(#[from] bday_core::Error),
  #[error("user {0} not found")]
  NotFound(PlatformId),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("chat platform error: {0}")]
  Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self { Self::Store(Box::new(e)) }

  pub fn upstream(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Upstream(Box::new(e))
  }
}

#[derive(Serialize)]
struct ApiResponse {
  message: String,
  success: bool,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Decode(e) => (StatusCode::BAD_REQUEST, format!("error in decoding: {e}")),
      _ => (StatusCode::INTERNAL_SERVER_ERROR, "failed to handle update".to_string()),
    };
    (status, Json(ApiResponse { message, success: false })).into_response()
  }
}
