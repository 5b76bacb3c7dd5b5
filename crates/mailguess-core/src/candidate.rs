//! Candidate addresses and the deduplicated set they are collected into.

use std::collections::HashSet;

use serde::Serialize;

// ─── Input ───────────────────────────────────────────────────────────────────

/// The name parts a candidate set is generated from.
///
/// Fields are free-form. `first`, `last` and `domain` are expected to be
/// non-empty; an empty `middle` disables the middle-name rules. See
/// [`crate::input::NameInput::validate`] for the checked constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameComponents {
  pub first:  String,
  pub middle: String,
  pub last:   String,
  pub domain: String,
}

impl NameComponents {
  pub fn new(
    first: impl Into<String>,
    middle: impl Into<String>,
    last: impl Into<String>,
    domain: impl Into<String>,
  ) -> Self {
    Self {
      first:  first.into(),
      middle: middle.into(),
      last:   last.into(),
      domain: domain.into(),
    }
  }
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// One generated address and the label of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
  pub email: String,
  pub label: &'static str,
}

// ─── CandidateSet ────────────────────────────────────────────────────────────

/// An ordered sequence of candidates with unique `email` values.
///
/// Built with [`FromIterator`]: the first candidate seen for an address is
/// kept and later ones are dropped, so the relative order of survivors is the
/// order they were produced in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet(Vec<Candidate>);

impl CandidateSet {
  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn iter(&self) -> std::slice::Iter<'_, Candidate> { self.0.iter() }

  pub fn as_slice(&self) -> &[Candidate] { &self.0 }

  /// Addresses only, in set order.
  pub fn emails(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(|c| c.email.as_str())
  }

  pub fn contains(&self, email: &str) -> bool {
    self.0.iter().any(|c| c.email == email)
  }
}

impl FromIterator<Candidate> for CandidateSet {
  fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
    let mut seen = HashSet::new();
    let unique = iter
      .into_iter()
      .filter(|c| seen.insert(c.email.clone()))
      .collect();
    Self(unique)
  }
}

impl IntoIterator for CandidateSet {
  type Item = Candidate;
  type IntoIter = std::vec::IntoIter<Candidate>;

  fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a CandidateSet {
  type Item = &'a Candidate;
  type IntoIter = std::slice::Iter<'a, Candidate>;

  fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn c(email: &str, label: &'static str) -> Candidate {
    Candidate { email: email.into(), label }
  }

  #[test]
  fn first_occurrence_wins() {
    let set: CandidateSet = vec![
      c("a@x.io", "first"),
      c("b@x.io", "fl"),
      c("a@x.io", "firstl"),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 2);
    assert_eq!(set.as_slice()[0].label, "first");
    assert_eq!(set.emails().collect::<Vec<_>>(), ["a@x.io", "b@x.io"]);
  }

  #[test]
  fn serializes_as_plain_array() {
    let set: CandidateSet = vec![c("a@x.io", "first")].into_iter().collect();
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json, serde_json::json!([{ "email": "a@x.io", "label": "first" }]));
  }
}
