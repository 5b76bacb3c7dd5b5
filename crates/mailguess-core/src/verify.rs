//! The verification contract shared by the proxy and its clients.
//!
//! [`Verifier`] is implemented by outbound adapters (the upstream provider in
//! `mailguess-provider`, the CLI's HTTP client). Everything above that seam
//! depends only on the normalised [`Verdict`], never on vendor field names.

use std::future::Future;

use serde::{Deserialize, Serialize};
use strum::Display;

// ─── Wire types ──────────────────────────────────────────────────────────────

/// The normalised provider verdict for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Verdict {
  /// Deliverable, and the domain is not catch-all.
  Success,
  /// Deliverable on a catch-all domain, or flagged risky.
  CatchAll,
  /// Undeliverable or unrecognised.
  Invalid,
}

/// A verdict plus an optional provider note, as returned by `GET /verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
  pub status: Verdict,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub raw:    Option<String>,
}

impl From<Verdict> for Verification {
  fn from(status: Verdict) -> Self { Self { status, raw: None } }
}

// ─── Per-candidate status ────────────────────────────────────────────────────

/// Verification state of one candidate in a view.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VerificationStatus {
  #[default]
  Unverified,
  Pending,
  Valid,
  Risky,
  Invalid,
  /// The lookup itself failed (transport, HTTP status or payload).
  Error,
}

impl VerificationStatus {
  /// `true` once a lookup has finished, successfully or not.
  pub fn is_resolved(&self) -> bool {
    !matches!(self, Self::Unverified | Self::Pending)
  }
}

impl From<Verdict> for VerificationStatus {
  fn from(verdict: Verdict) -> Self {
    match verdict {
      Verdict::Success => Self::Valid,
      Verdict::CatchAll => Self::Risky,
      Verdict::Invalid => Self::Invalid,
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Looks up the deliverability of one address.
///
/// Futures are `Send` so implementations can run on the verification queue's
/// worker task.
pub trait Verifier: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Make exactly one lookup for `email`.
  fn verify<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Verification, Self::Error>> + Send + 'a;

  /// `false` when the verifier is missing configuration it needs (such as a
  /// credential), so that every lookup would fail for that reason alone.
  fn is_configured(&self) -> bool { true }
}

impl<V: Verifier> Verifier for std::sync::Arc<V> {
  type Error = V::Error;

  fn verify<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Verification, Self::Error>> + Send + 'a {
    (**self).verify(email)
  }

  fn is_configured(&self) -> bool { (**self).is_configured() }
}

/// Verify one address and fold any failure into
/// [`VerificationStatus::Error`].
pub async fn verify_one<V: Verifier>(
  verifier: &V,
  email: &str,
) -> VerificationStatus {
  verify_one_with_raw(verifier, email).await.0
}

/// [`verify_one`], also returning the provider's `raw` note when it sent
/// one. A failed lookup has no note.
pub async fn verify_one_with_raw<V: Verifier>(
  verifier: &V,
  email: &str,
) -> (VerificationStatus, Option<String>) {
  match verifier.verify(email).await {
    Ok(verification) => {
      tracing::debug!(email, verdict = %verification.status, "verified");
      (verification.status.into(), verification.raw)
    }
    Err(e) => {
      tracing::warn!(email, error = %e, "verification failed");
      (VerificationStatus::Error, None)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("boom")]
  struct Boom;

  struct Fixed(Result<Verdict, ()>);

  impl Verifier for Fixed {
    type Error = Boom;

    async fn verify(&self, _email: &str) -> Result<Verification, Boom> {
      self.0.map(Verification::from).map_err(|()| Boom)
    }
  }

  #[tokio::test]
  async fn verdicts_map_to_statuses() {
    for (verdict, status) in [
      (Verdict::Success, VerificationStatus::Valid),
      (Verdict::CatchAll, VerificationStatus::Risky),
      (Verdict::Invalid, VerificationStatus::Invalid),
    ] {
      assert_eq!(verify_one(&Fixed(Ok(verdict)), "a@b.c").await, status);
    }
  }

  #[tokio::test]
  async fn failures_become_error_status() {
    assert_eq!(
      verify_one(&Fixed(Err(())), "a@b.c").await,
      VerificationStatus::Error
    );
  }

  struct WithNote;

  impl Verifier for WithNote {
    type Error = Boom;

    async fn verify(&self, _email: &str) -> Result<Verification, Boom> {
      Ok(Verification {
        status: Verdict::Invalid,
        raw:    Some("Endpoint Error".to_owned()),
      })
    }
  }

  #[tokio::test]
  async fn raw_note_is_kept_alongside_the_status() {
    assert_eq!(
      verify_one_with_raw(&WithNote, "a@b.c").await,
      (VerificationStatus::Invalid, Some("Endpoint Error".to_owned()))
    );
    assert_eq!(
      verify_one_with_raw(&Fixed(Err(())), "a@b.c").await,
      (VerificationStatus::Error, None)
    );
    assert_eq!(
      verify_one_with_raw(&Fixed(Ok(Verdict::Success)), "a@b.c").await,
      (VerificationStatus::Valid, None)
    );
  }

  #[test]
  fn wire_spelling() {
    let json = serde_json::to_string(&Verification::from(Verdict::CatchAll)).unwrap();
    assert_eq!(json, r#"{"status":"CatchAll"}"#);

    let parsed: Verification =
      serde_json::from_str(r#"{"status":"Invalid","raw":"Endpoint Error"}"#).unwrap();
    assert_eq!(parsed.status, Verdict::Invalid);
    assert_eq!(parsed.raw.as_deref(), Some("Endpoint Error"));

    assert_eq!(VerificationStatus::Risky.to_string(), "risky");
  }
}
