//! Core types and pure logic for mailguess.
//!
//! Name expansion, pattern generation and deduplication live here, together
//! with the verification contract ([`verify::Verifier`]) and the sequential
//! queue that drives it. This crate has no HTTP dependencies; outbound
//! adapters live in `mailguess-provider`.

pub mod board;
pub mod candidate;
pub mod error;
pub mod expand;
pub mod export;
pub mod input;
pub mod nickname;
pub mod pattern;
pub mod queue;
pub mod verify;

pub use candidate::{Candidate, CandidateSet, NameComponents};
pub use error::{Error, Result};
pub use expand::expand;
pub use pattern::generate;
