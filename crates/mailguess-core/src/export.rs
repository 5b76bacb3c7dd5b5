//! CSV export of a candidate set.

use chrono::{DateTime, Utc};

use crate::candidate::CandidateSet;

pub const CSV_HEADER: &str = "Email";

/// `Email` header line followed by one address per line, in set order.
pub fn to_csv(set: &CandidateSet) -> String {
  let mut out = String::from(CSV_HEADER);
  out.push('\n');
  out.push_str(&set.emails().collect::<Vec<_>>().join("\n"));
  out
}

/// Download file name for an export taken at `now`, e.g.
/// `email_patterns_1700000000000.csv`.
pub fn export_file_name(now: DateTime<Utc>) -> String {
  format!("email_patterns_{}.csv", now.timestamp_millis())
}
