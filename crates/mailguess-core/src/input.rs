//! Raw form input and its validation.

use serde::Deserialize;
use strum::Display;

use crate::{Error, Result, candidate::NameComponents};

/// A required form field, named the way the form labels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
  #[strum(serialize = "First Name")]
  FirstName,
  #[strum(serialize = "Last Name")]
  LastName,
  #[strum(serialize = "Domain")]
  Domain,
}

/// Name fields exactly as a user typed them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameInput {
  #[serde(default)]
  pub first:  String,
  #[serde(default)]
  pub middle: String,
  #[serde(default)]
  pub last:   String,
  #[serde(default)]
  pub domain: String,
}

impl NameInput {
  /// Trim every field, drop the first `@` from the domain, and require
  /// first name, last name and domain.
  ///
  /// All missing fields are reported together, in form order.
  pub fn validate(&self) -> Result<NameComponents> {
    let first = self.first.trim();
    let middle = self.middle.trim();
    let last = self.last.trim();
    let domain = strip_at(&self.domain);

    let missing: Vec<Field> = [
      (Field::FirstName, first),
      (Field::LastName, last),
      (Field::Domain, domain.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
      return Err(Error::MissingFields(missing));
    }

    Ok(NameComponents::new(first, middle, last, domain))
  }
}

/// Normalise a domain for an MX lookup and reject values that cannot be a
/// mail domain (shorter than three characters or without a dot).
pub fn check_mx_domain(raw: &str) -> Result<String> {
  let domain = strip_at(raw);
  if domain.chars().count() < 3 || !domain.contains('.') {
    return Err(Error::InvalidDomain(domain));
  }
  Ok(domain)
}

fn strip_at(raw: &str) -> String { raw.trim().replacen('@', "", 1) }

#[cfg(test)]
mod tests {
  use super::*;

  fn input(first: &str, middle: &str, last: &str, domain: &str) -> NameInput {
    NameInput {
      first:  first.into(),
      middle: middle.into(),
      last:   last.into(),
      domain: domain.into(),
    }
  }

  #[test]
  fn trims_and_strips_at_sign() {
    let name = input("  Jane ", " Q ", " Roe", " @acme.com ").validate().unwrap();
    assert_eq!(name, NameComponents::new("Jane", "Q", "Roe", "acme.com"));
  }

  #[test]
  fn middle_name_is_optional() {
    let name = input("Jane", "   ", "Roe", "acme.com").validate().unwrap();
    assert!(name.middle.is_empty());
  }

  #[test]
  fn reports_every_missing_field_in_form_order() {
    let err = input(" ", "x", "", "@").validate().unwrap_err();
    assert_eq!(
      err,
      Error::MissingFields(vec![Field::FirstName, Field::LastName, Field::Domain])
    );
    assert_eq!(
      err.to_string(),
      "Required fields missing: First Name, Last Name, Domain"
    );
  }

  #[test]
  fn single_missing_field() {
    let err = input("Jane", "", "Roe", "").validate().unwrap_err();
    assert_eq!(err.to_string(), "Required fields missing: Domain");
  }

  #[test]
  fn mx_domain_checks() {
    assert_eq!(check_mx_domain(" @acme.com").unwrap(), "acme.com");
    assert!(matches!(check_mx_domain("a."), Err(Error::InvalidDomain(_))));
    assert!(matches!(check_mx_domain("localhost"), Err(Error::InvalidDomain(_))));
    assert!(matches!(check_mx_domain(""), Err(Error::InvalidDomain(_))));
  }
}
