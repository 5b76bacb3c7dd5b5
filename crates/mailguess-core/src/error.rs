//! Error types for `mailguess-core`.

use thiserror::Error;

use crate::input::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// One or more required form fields were blank. Fields are listed in form
  /// order.
  #[error("Required fields missing: {}", join_fields(.0))]
  MissingFields(Vec<Field>),

  #[error("not a checkable domain: {0:?}")]
  InvalidDomain(String),

  #[error("verification queue is closed")]
  QueueClosed,
}

fn join_fields(fields: &[Field]) -> String {
  fields
    .iter()
    .map(Field::to_string)
    .collect::<Vec<_>>()
    .join(", ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
