//! A single-worker verification queue.
//!
//! Addresses submitted to a [`VerifyQueue`] are verified by one background
//! task, one at a time, in submission order. The worker reports a
//! [`VerificationStatus::Pending`] event immediately before each lookup and
//! the resolved status immediately after it, so call *n* can never be seen
//! to start before call *n − 1* has resolved.
//!
//! There is no cancellation: once submitted, every address is looked up even
//! if nobody is listening for the result.
//!
//! Every submission gets its own [`JobId`], echoed on its events, so a caller
//! can tell its own results apart from those of earlier submissions of the
//! same address.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
  Error, Result,
  verify::{VerificationStatus, Verifier, verify_one},
};

/// Identifies one submission, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(pub u64);

/// A status change for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEvent {
  pub job:    JobId,
  pub email:  String,
  pub status: VerificationStatus,
}

pub struct VerifyQueue {
  jobs:     mpsc::UnboundedSender<(JobId, String)>,
  events:   mpsc::UnboundedReceiver<StatusEvent>,
  worker:   JoinHandle<()>,
  next_job: AtomicU64,
}

impl VerifyQueue {
  /// Start the worker task on the current tokio runtime.
  pub fn spawn<V>(verifier: V) -> Self
  where
    V: Verifier + 'static,
  {
    let (jobs, mut pending) = mpsc::unbounded_channel::<(JobId, String)>();
    let (events_tx, events) = mpsc::unbounded_channel();

    let worker = tokio::spawn(async move {
      while let Some((job, email)) = pending.recv().await {
        // Send errors only mean the receiving side is gone; keep draining.
        let _ = events_tx.send(StatusEvent {
          job,
          email: email.clone(),
          status: VerificationStatus::Pending,
        });
        let status = verify_one(&verifier, &email).await;
        let _ = events_tx.send(StatusEvent { job, email, status });
      }
      tracing::debug!("verification queue drained");
    });

    Self {
      jobs,
      events,
      worker,
      next_job: AtomicU64::new(0),
    }
  }

  /// Enqueue one address. The returned id tags both of its events.
  pub fn submit(&self, email: impl Into<String>) -> Result<JobId> {
    let job = JobId(self.next_job.fetch_add(1, Ordering::Relaxed));
    self
      .jobs
      .send((job, email.into()))
      .map_err(|_| Error::QueueClosed)?;
    Ok(job)
  }

  /// Wait for the next status event. `None` once the worker has stopped and
  /// every event has been read.
  pub async fn next_event(&mut self) -> Option<StatusEvent> {
    self.events.recv().await
  }

  /// Stop accepting jobs and wait for the worker to finish what was queued.
  pub async fn shutdown(self) {
    let Self {
      jobs,
      events,
      worker,
      ..
    } = self;
    drop(jobs);
    drop(events);
    if let Err(e) = worker.await {
      tracing::error!(error = %e, "verification worker panicked");
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{
    sync::{
      Arc, Mutex,
      atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
  };

  use super::*;
  use crate::verify::{Verdict, Verification};

  #[derive(Debug, thiserror::Error)]
  #[error("upstream unavailable")]
  struct Unavailable;

  /// Records call order and the peak number of overlapping calls.
  #[derive(Default)]
  struct Probe {
    in_flight: AtomicUsize,
    peak:      AtomicUsize,
    calls:     Mutex<Vec<String>>,
  }

  impl Verifier for Probe {
    type Error = Unavailable;

    async fn verify(&self, email: &str) -> Result<Verification, Unavailable> {
      let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
      self.peak.fetch_max(now, Ordering::SeqCst);
      self.calls.lock().unwrap().push(email.to_owned());

      tokio::time::sleep(Duration::from_millis(5)).await;

      self.in_flight.fetch_sub(1, Ordering::SeqCst);
      if email.starts_with("down") {
        Err(Unavailable)
      } else {
        Ok(Verdict::Success.into())
      }
    }
  }

  #[tokio::test]
  async fn pending_precedes_each_result_in_order() {
    let probe = Arc::new(Probe::default());
    let mut queue = VerifyQueue::spawn(probe.clone());
    let mut jobs = Vec::new();
    for email in ["a@x.io", "down@x.io", "b@x.io"] {
      jobs.push(queue.submit(email).unwrap());
    }
    assert_eq!(jobs, [JobId(0), JobId(1), JobId(2)]);

    let mut seen = Vec::new();
    for _ in 0..6 {
      seen.push(queue.next_event().await.unwrap());
    }
    queue.shutdown().await;

    let expected = [
      ("a@x.io", VerificationStatus::Pending),
      ("a@x.io", VerificationStatus::Valid),
      ("down@x.io", VerificationStatus::Pending),
      ("down@x.io", VerificationStatus::Error),
      ("b@x.io", VerificationStatus::Pending),
      ("b@x.io", VerificationStatus::Valid),
    ];
    let tags: Vec<_> = seen.iter().map(|e| e.job).collect();
    assert_eq!(tags, [jobs[0], jobs[0], jobs[1], jobs[1], jobs[2], jobs[2]]);
    let seen: Vec<_> = seen.iter().map(|e| (e.email.as_str(), e.status)).collect();
    assert_eq!(seen, expected);
    assert_eq!(probe.peak.load(Ordering::SeqCst), 1);
    assert_eq!(*probe.calls.lock().unwrap(), ["a@x.io", "down@x.io", "b@x.io"]);
  }

  #[tokio::test]
  async fn resubmitting_an_address_gets_a_new_id() {
    let queue = VerifyQueue::spawn(Arc::new(Probe::default()));
    let first = queue.submit("a@x.io").unwrap();
    let second = queue.submit("a@x.io").unwrap();
    assert_ne!(first, second);
    queue.shutdown().await;
  }

  #[tokio::test]
  async fn shutdown_drains_queued_jobs() {
    let probe = Arc::new(Probe::default());
    let queue = VerifyQueue::spawn(probe.clone());
    for i in 0..4 {
      queue.submit(format!("u{i}@x.io")).unwrap();
    }
    queue.shutdown().await;

    assert_eq!(probe.calls.lock().unwrap().len(), 4);
    assert_eq!(probe.peak.load(Ordering::SeqCst), 1);
  }
}
