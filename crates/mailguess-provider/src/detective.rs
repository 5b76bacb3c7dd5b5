//! EmailDetective verification adapter.
//!
//! The provider's response fields have varied between API revisions
//! (`status`, `is_catchall`, `valid_email`, `score`). All of them are read
//! into [`RawVerdict`] and folded into a [`Verdict`] here; nothing outside
//! this module looks at vendor field names.

use std::time::Duration;

use mailguess_core::verify::{Verdict, Verification, Verifier};
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.emaildetective.io";

/// Environment variable the server reads the provider key from.
pub const API_KEY_ENV: &str = "EMAILDETECTIVE_API_KEY";

// ─── Configuration ───────────────────────────────────────────────────────────

/// Non-secret provider settings. The API key is supplied separately.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
  #[serde(default = "default_base_url")]
  pub base_url:     String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

impl Default for ProviderConfig {
  fn default() -> Self {
    Self {
      base_url:     default_base_url(),
      timeout_secs: default_timeout_secs(),
    }
  }
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_owned() }

fn default_timeout_secs() -> u64 { 30 }

// ─── Raw response ────────────────────────────────────────────────────────────

/// The provider's response body, every field optional.
///
/// `score` is only logged, so it is kept as an opaque JSON value; whatever
/// type the provider sends for it never fails the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVerdict {
  pub status:      Option<String>,
  pub is_catchall: Option<bool>,
  pub valid_email: Option<bool>,
  pub score:       Option<serde_json::Value>,
  pub message:     Option<String>,
}

impl RawVerdict {
  /// Fold the raw fields into the three-way verdict.
  ///
  /// A deliverable verdict (`deliverable`/`valid`, or a bare
  /// `valid_email: true`) is `Success` unless the catch-all flag is set. A
  /// `risky` status or a set catch-all flag is `CatchAll`. Everything else is
  /// `Invalid`.
  pub fn normalize(&self) -> Verification {
    if self
      .message
      .as_deref()
      .is_some_and(|m| m.contains("endpoint not found"))
    {
      return Verification {
        status: Verdict::Invalid,
        raw:    Some("Endpoint Error".to_owned()),
      };
    }

    let status = self.status.as_deref().map(str::to_lowercase);
    let catch_all = self.is_catchall == Some(true);
    let deliverable = match status.as_deref() {
      Some("deliverable" | "valid") => true,
      Some(_) => false,
      None => self.valid_email == Some(true),
    };

    let verdict = if deliverable {
      if catch_all { Verdict::CatchAll } else { Verdict::Success }
    } else if status.as_deref() == Some("risky") || catch_all {
      Verdict::CatchAll
    } else {
      Verdict::Invalid
    };
    verdict.into()
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Verifies addresses against the EmailDetective HTTP API.
#[derive(Debug)]
pub struct EmailDetective {
  client:   Client,
  base_url: String,
  api_key:  Option<SecretString>,
}

impl EmailDetective {
  /// Build the adapter. A missing `api_key` is allowed here; each lookup
  /// then fails with [`Error::MissingCredential`] without touching the
  /// network.
  pub fn new(config: &ProviderConfig, api_key: Option<SecretString>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("mailguess/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(Error::Client)?;
    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_owned(),
      api_key,
    })
  }
}

impl Verifier for EmailDetective {
  type Error = Error;

  async fn verify(&self, email: &str) -> Result<Verification> {
    let api_key = self.api_key.as_ref().ok_or(Error::MissingCredential)?;

    let resp = self
      .client
      .get(format!("{}/v1/verify", self.base_url))
      .query(&[("email", email)])
      .header("x-api-key", api_key.expose_secret())
      .header(header::ACCEPT, "application/json")
      .send()
      .await
      .map_err(Error::Transport)?;

    if !resp.status().is_success() {
      return Err(Error::Upstream(resp.status()));
    }

    let raw: RawVerdict = resp.json().await.map_err(Error::Payload)?;
    tracing::debug!(
      email,
      status = raw.status.as_deref(),
      is_catchall = raw.is_catchall,
      score = ?raw.score,
      "upstream verdict"
    );
    Ok(raw.normalize())
  }

  fn is_configured(&self) -> bool { self.api_key.is_some() }
}
