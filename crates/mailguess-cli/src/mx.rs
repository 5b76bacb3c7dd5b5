//! MX lookups as the CLI reports them.
//!
//! A lookup never fails the command: a domain without mail exchangers and a
//! resolver that cannot be reached both end up as a warning line.

use mailguess_provider::{MxChecker, MxStatus};

use crate::output;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxReport {
  Active(Vec<String>),
  NoRecords,
  Failed(String),
}

impl MxReport {
  /// The warning to show for this outcome, if any.
  pub fn warning(&self, domain: &str) -> Option<String> {
    match self {
      MxReport::Active(_) => None,
      MxReport::NoRecords => Some(output::no_mail_servers(domain)),
      MxReport::Failed(reason) => Some(output::dns_check_failed(domain, reason)),
    }
  }
}

pub async fn lookup(checker: &MxChecker, domain: &str) -> MxReport {
  match checker.check(domain).await {
    Ok(MxStatus::Active { exchangers }) => {
      tracing::info!(%domain, count = exchangers.len(), "mail servers found");
      MxReport::Active(exchangers)
    }
    Ok(MxStatus::NoRecords) => MxReport::NoRecords,
    Err(e) => {
      tracing::warn!(%domain, error = %e, "MX lookup failed");
      MxReport::Failed(e.to_string())
    }
  }
}
