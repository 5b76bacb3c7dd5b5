//! Terminal formatting.

use mailguess_core::{Candidate, board::Entry, verify::VerificationStatus};

const EMAIL_WIDTH: usize = 40;

pub fn candidate_line(candidate: &Candidate) -> String {
  format!("{:<width$} {}", candidate.email, candidate.label, width = EMAIL_WIDTH)
}

pub fn variations_found(count: usize) -> String { format!("{count} Variations Found") }

pub fn status_line(entry: &Entry) -> String {
  format!("{:<width$} {}", entry.candidate.email, entry.status, width = EMAIL_WIDTH)
}

/// `valid: 1, risky: 2, ...` for every status with a non-zero count.
pub fn tally(counts: &[(VerificationStatus, usize)]) -> String {
  counts
    .iter()
    .filter(|(_, n)| *n > 0)
    .map(|(status, n)| format!("{status}: {n}"))
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn no_mail_servers(domain: &str) -> String {
  format!("warning: no mail servers found for {domain}; addresses there are unlikely to work")
}

pub fn dns_check_failed(domain: &str, reason: &str) -> String {
  format!("warning: DNS check failed for {domain}: {reason}")
}

/// `email: status`, with the provider's note in parentheses when present.
pub fn verification_line(email: &str, status: VerificationStatus, raw: Option<&str>) -> String {
  match raw {
    Some(raw) => format!("{email}: {status} ({raw})"),
    None => format!("{email}: {status}"),
  }
}
