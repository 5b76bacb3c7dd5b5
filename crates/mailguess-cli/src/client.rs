//! Async HTTP client for the mailguess server's `/api/verify` endpoint.

use std::time::Duration;

use mailguess_core::verify::{Verification, Verifier};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("failed to build HTTP client: {0}")]
  Build(#[source] reqwest::Error),

  #[error("GET /api/verify failed: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("GET /api/verify → {status}: {message}")]
  Rejected { status: StatusCode, message: String },

  #[error("deserialising verification: {0}")]
  Payload(#[source] reqwest::Error),
}

/// Error body the server sends with every non-2xx answer.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  message: String,
}

/// Verifies addresses through a running mailguess server.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: &str) -> Result<Self, ClientError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .map_err(ClientError::Build)?;
    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_owned(),
    })
  }

  fn url(&self, path: &str) -> String { format!("{}/api{}", self.base_url, path) }
}

impl Verifier for ApiClient {
  type Error = ClientError;

  /// `GET /api/verify?email=<address>`
  async fn verify(&self, email: &str) -> Result<Verification, ClientError> {
    let resp = self
      .client
      .get(self.url("/verify"))
      .query(&[("email", email)])
      .send()
      .await
      .map_err(ClientError::Transport)?;

    let status = resp.status();
    if !status.is_success() {
      let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_owned(),
      };
      return Err(ClientError::Rejected { status, message });
    }
    resp.json().await.map_err(ClientError::Payload)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use mailguess_core::verify::Verdict;

  use super::*;
  use crate::test_support::serve;

  #[derive(Debug, thiserror::Error)]
  #[error("provider unavailable")]
  struct Unavailable;

  struct ByLocalPart;

  impl Verifier for ByLocalPart {
    type Error = Unavailable;

    async fn verify(&self, email: &str) -> Result<Verification, Unavailable> {
      match email.split('@').next() {
        Some("good") => Ok(Verdict::Success.into()),
        Some("down") => Err(Unavailable),
        _ => Ok(Verdict::Invalid.into()),
      }
    }
  }

  /// A real API router on an ephemeral port.
  async fn server() -> String {
    let app = axum::Router::new().nest("/api", mailguess_api::api_router(Arc::new(ByLocalPart)));
    format!("{}/", serve(app).await)
  }

  #[tokio::test]
  async fn verifies_through_the_server() {
    let client = ApiClient::new(&server().await).unwrap();
    assert_eq!(client.verify("good@acme.com").await.unwrap().status, Verdict::Success);
    assert_eq!(client.verify("bad@acme.com").await.unwrap().status, Verdict::Invalid);
  }

  #[tokio::test]
  async fn server_errors_carry_its_message() {
    let client = ApiClient::new(&server().await).unwrap();
    match client.verify("down@acme.com").await {
      Err(ClientError::Rejected { status, message }) => {
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "upstream verification failed");
      }
      other => panic!("expected rejection, got {other:?}"),
    }
    match client.verify("").await {
      Err(ClientError::Rejected { status, message }) => {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Email is required");
      }
      other => panic!("expected rejection, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn unreachable_server_is_a_transport_error() {
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    assert!(matches!(
      client.verify("good@acme.com").await,
      Err(ClientError::Transport(_))
    ));
  }
}
