//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Server-side failures render a fixed message; the underlying cause is only
/// logged by the handler that produced it.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("verification service is not configured")]
  NotConfigured,

  #[error("upstream verification failed")]
  Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<mailguess_core::Error> for ApiError {
  fn from(e: mailguess_core::Error) -> Self { ApiError::BadRequest(e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotConfigured | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = json!({ "status": "Error", "message": self.to_string() });
    (status, Json(body)).into_response()
  }
}
