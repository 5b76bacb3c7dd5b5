//! Outbound adapters for mailguess.
//!
//! - [`detective::EmailDetective`] implements
//!   [`mailguess_core::verify::Verifier`] against the upstream verification
//!   provider and normalises its response fields.
//! - [`dns::MxChecker`] asks a DNS-over-HTTPS resolver whether a domain has
//!   mail exchangers.

pub mod detective;
pub mod dns;
pub mod error;

pub use detective::{EmailDetective, ProviderConfig, RawVerdict};
pub use dns::{MxChecker, MxStatus};
pub use error::{Error, Result};

#[cfg(test)]
mod test_support;
