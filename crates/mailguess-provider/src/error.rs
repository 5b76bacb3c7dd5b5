//! Error type for `mailguess-provider`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// No API key was configured for the upstream provider.
  #[error("no provider credential configured")]
  MissingCredential,

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("request failed: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("upstream responded {0}")]
  Upstream(StatusCode),

  #[error("unexpected response payload: {0}")]
  Payload(#[source] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
