//! Per-candidate verification state for a view.
//!
//! A [`Board`] pairs each candidate of a [`CandidateSet`] with its
//! [`VerificationStatus`]. Statuses are keyed by address; applying an event
//! touches exactly one entry.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
  Error, Result,
  candidate::{Candidate, CandidateSet},
  queue::{StatusEvent, VerifyQueue},
  verify::VerificationStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
  #[serde(flatten)]
  pub candidate: Candidate,
  pub status:    VerificationStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Board {
  entries: Vec<Entry>,
}

impl Board {
  /// Every candidate starts [`VerificationStatus::Unverified`].
  pub fn new(set: CandidateSet) -> Self {
    let entries = set
      .into_iter()
      .map(|candidate| Entry {
        candidate,
        status: VerificationStatus::Unverified,
      })
      .collect();
    Self { entries }
  }

  pub fn entries(&self) -> &[Entry] { &self.entries }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn status(&self, email: &str) -> Option<VerificationStatus> {
    self
      .entries
      .iter()
      .find(|e| e.candidate.email == email)
      .map(|e| e.status)
  }

  /// Number of entries currently in `status`.
  pub fn count(&self, status: VerificationStatus) -> usize {
    self.entries.iter().filter(|e| e.status == status).count()
  }

  /// Record `event` against its candidate. Returns the updated entry, or
  /// `None` if the address is not on this board.
  pub fn apply(&mut self, event: &StatusEvent) -> Option<&Entry> {
    let entry = self
      .entries
      .iter_mut()
      .find(|e| e.candidate.email == event.email)?;
    entry.status = event.status;
    Some(entry)
  }

  /// Verify every candidate on the board through `queue`.
  ///
  /// The addresses are snapshotted and submitted up front; this returns once
  /// each of those submissions has resolved. Events from jobs submitted
  /// before this call are still applied but do not count towards completion.
  /// `on_update` sees every entry change as it is applied, including the
  /// `pending` transitions.
  pub async fn verify_all<F>(
    &mut self,
    queue: &mut VerifyQueue,
    mut on_update: F,
  ) -> Result<()>
  where
    F: FnMut(&Entry),
  {
    let mut outstanding = HashSet::with_capacity(self.entries.len());
    for entry in &self.entries {
      outstanding.insert(queue.submit(entry.candidate.email.as_str())?);
    }

    while !outstanding.is_empty() {
      let event = queue.next_event().await.ok_or(Error::QueueClosed)?;
      if let Some(entry) = self.apply(&event) {
        on_update(entry);
      }
      if event.status.is_resolved() {
        outstanding.remove(&event.job);
      }
    }
    Ok(())
  }
}
