//! The rule catalog that joins name parts into local parts.
//!
//! Rules are data: each is a label plus a sequence of [`Segment`]s. The
//! catalog order is the output order, and because deduplication keeps the
//! first occurrence it also decides which label an address is reported under.

use crate::candidate::Candidate;

// ─── Rules ───────────────────────────────────────────────────────────────────

/// One piece of a local-part template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
  First,
  FirstInitial,
  Middle,
  MiddleInitial,
  Last,
  LastInitial,
  /// A literal separator such as `"."`, `"_"` or `"-"`.
  Sep(&'static str),
}

/// A named local-part template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
  pub label: &'static str,
  segments:  &'static [Segment],
}

impl PatternRule {
  const fn new(label: &'static str, segments: &'static [Segment]) -> Self {
    Self { label, segments }
  }

  /// Concatenate the segments for `parts`. The result is not cleaned.
  pub fn build(&self, parts: &NameParts<'_>) -> String {
    self
      .segments
      .iter()
      .map(|segment| match segment {
        Segment::First => parts.first,
        Segment::FirstInitial => initial(parts.first),
        Segment::Middle => parts.middle,
        Segment::MiddleInitial => initial(parts.middle),
        Segment::Last => parts.last,
        Segment::LastInitial => initial(parts.last),
        Segment::Sep(sep) => *sep,
      })
      .collect()
  }
}

use Segment::{First, FirstInitial, Last, LastInitial, Middle, MiddleInitial, Sep};

/// Rules applied to every name.
pub const BASE_RULES: [PatternRule; 13] = [
  PatternRule::new("first.last", &[First, Sep("."), Last]),
  PatternRule::new("firstlast", &[First, Last]),
  PatternRule::new("flast", &[FirstInitial, Last]),
  PatternRule::new("f.last", &[FirstInitial, Sep("."), Last]),
  PatternRule::new("firstl", &[First, LastInitial]),
  PatternRule::new("first.l", &[First, Sep("."), LastInitial]),
  PatternRule::new("first_last", &[First, Sep("_"), Last]),
  PatternRule::new("first-last", &[First, Sep("-"), Last]),
  PatternRule::new("f_last", &[FirstInitial, Sep("_"), Last]),
  PatternRule::new("last.first", &[Last, Sep("."), First]),
  PatternRule::new("lastf", &[Last, FirstInitial]),
  PatternRule::new("first", &[First]),
  PatternRule::new("fl", &[FirstInitial, LastInitial]),
];

/// Rules appended only when a middle name is present.
pub const MIDDLE_RULES: [PatternRule; 6] = [
  PatternRule::new("first.mid.last", &[First, Sep("."), Middle, Sep("."), Last]),
  PatternRule::new("firstmlast", &[First, MiddleInitial, Last]),
  PatternRule::new("fmlast", &[FirstInitial, MiddleInitial, Last]),
  PatternRule::new("f.m.last", &[FirstInitial, Sep("."), MiddleInitial, Sep("."), Last]),
  PatternRule::new("firstmidlast", &[First, Middle, Last]),
  PatternRule::new("first_mid_last", &[First, Sep("_"), Middle, Sep("_"), Last]),
];

/// Borrowed name parts handed to [`PatternRule::build`].
#[derive(Debug, Clone, Copy)]
pub struct NameParts<'a> {
  pub first:  &'a str,
  pub middle: &'a str,
  pub last:   &'a str,
}

/// The first character of `s`, or `""` for an empty string.
fn initial(s: &str) -> &str {
  match s.char_indices().nth(1) {
    Some((end, _)) => &s[..end],
    None => s,
  }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Produce every candidate for one name, in catalog order.
///
/// Returns 13 candidates, or 19 when `middle` is non-empty. Empty `first` or
/// `last` are not rejected here; they simply yield empty segments.
pub fn generate(first: &str, middle: &str, last: &str, domain: &str) -> Vec<Candidate> {
  let parts = NameParts { first, middle, last };
  let middle_rules: &[PatternRule] = if middle.is_empty() { &[] } else { &MIDDLE_RULES };

  BASE_RULES
    .iter()
    .chain(middle_rules)
    .map(|rule| Candidate {
      email: format!("{}@{domain}", clean_local_part(&rule.build(&parts))),
      label: rule.label,
    })
    .collect()
}

/// Strip whitespace, lowercase, and collapse runs of `.` into one.
pub fn clean_local_part(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  for c in raw
    .chars()
    .filter(|c| !c.is_whitespace())
    .flat_map(char::to_lowercase)
  {
    if c == '.' && out.ends_with('.') {
      continue;
    }
    out.push(c);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn emails(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.email.as_str()).collect()
  }

  #[test]
  fn base_catalog_order() {
    let out = generate("John", "", "Doe", "acme.com");
    assert_eq!(emails(&out), [
      "john.doe@acme.com",
      "johndoe@acme.com",
      "jdoe@acme.com",
      "j.doe@acme.com",
      "johnd@acme.com",
      "john.d@acme.com",
      "john_doe@acme.com",
      "john-doe@acme.com",
      "j_doe@acme.com",
      "doe.john@acme.com",
      "doej@acme.com",
      "john@acme.com",
      "jd@acme.com",
    ]);
    assert_eq!(out[0].label, "first.last");
    assert_eq!(out[12].label, "fl");
  }

  #[test]
  fn middle_rules_follow_base_rules() {
    let out = generate("John", "Quincy", "Doe", "acme.com");
    assert_eq!(out.len(), 19);
    assert_eq!(&emails(&out)[13..], [
      "john.quincy.doe@acme.com",
      "johnqdoe@acme.com",
      "jqdoe@acme.com",
      "j.q.doe@acme.com",
      "johnquincydoe@acme.com",
      "john_quincy_doe@acme.com",
    ]);
    let labels: Vec<_> = out[13..].iter().map(|c| c.label).collect();
    assert_eq!(labels, [
      "first.mid.last",
      "firstmlast",
      "fmlast",
      "f.m.last",
      "firstmidlast",
      "first_mid_last",
    ]);
  }

  #[test]
  fn whitespace_is_removed_and_case_folded() {
    let out = generate("Mary Ann", "", "Van Der Berg", "Example.org");
    assert_eq!(out[0].email, "maryann.vanderberg@Example.org");
  }

  #[test]
  fn repeated_dots_collapse() {
    assert_eq!(clean_local_part("john..doe"), "john.doe");
    assert_eq!(clean_local_part("a...b. .c"), "a.b.c");

    let out = generate("john.", "", "doe", "domain");
    assert_eq!(out[0].email, "john.doe@domain");
  }

  #[test]
  fn empty_last_name_yields_dangling_separator() {
    let out = generate("john", "", "", "acme.com");
    assert_eq!(out.len(), 13);
    assert_eq!(out[0].email, "john.@acme.com");
    assert_eq!(out[12].email, "j@acme.com");
  }

  #[test]
  fn initials_respect_multibyte_characters() {
    let out = generate("Élodie", "", "Ørsted", "x.dk");
    assert_eq!(out[2].email, "éørsted@x.dk");
    assert_eq!(out[12].email, "éø@x.dk");
  }
}
