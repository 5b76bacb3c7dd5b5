//! Handlers for `/verify`.
//!
//! | Method    | Path      | Notes |
//! |-----------|-----------|-------|
//! | `GET`     | `/verify` | `?email=<address>`; 400 if absent |
//! | `OPTIONS` | `/verify` | Preflight; 200 with an empty body |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
};
use mailguess_core::verify::{Verification, Verifier};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
  pub email: Option<String>,
}

/// `GET /verify?email=<address>`
///
/// Exactly one upstream call per request; nothing is cached.
pub async fn handler<V>(
  State(verifier): State<Arc<V>>,
  Query(params): Query<VerifyParams>,
) -> Result<Json<Verification>, ApiError>
where
  V: Verifier,
{
  let email = params
    .email
    .filter(|e| !e.is_empty())
    .ok_or_else(|| ApiError::BadRequest("Email is required".to_owned()))?;

  if !verifier.is_configured() {
    tracing::error!("verification requested but no provider credential is configured");
    return Err(ApiError::NotConfigured);
  }

  let verification = verifier.verify(&email).await.map_err(|e| {
    tracing::error!(%email, error = %e, "upstream verification failed");
    ApiError::Upstream(Box::new(e))
  })?;
  Ok(Json(verification))
}

/// `OPTIONS /verify`
pub async fn preflight() -> StatusCode { StatusCode::OK }
