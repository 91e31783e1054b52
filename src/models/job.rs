//! Job model.
//!
//! A job is a single CPU burst characterized only by when it becomes
//! eligible to run and how much CPU time it needs.
//!
//! # Time Representation
//! All times are in seconds relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Job identifier: zero-based position in the input sequence.
pub type JobId = usize;

/// A job to be dispatched.
///
/// `arrival_time` and `burst_time` are fixed for the job's lifetime.
/// `remaining_time` is only consumed by preemptive policies; the outcome is
/// written exactly once when the last unit of work finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Stable identifier, unique within a ledger.
    pub id: JobId,
    /// Time at which the job becomes eligible to run (s).
    pub arrival_time: f64,
    /// Total CPU time required (s).
    pub burst_time: f64,
    /// CPU time still owed to the job (s).
    pub remaining_time: f64,
    /// Completion record. `None` until the job finishes.
    pub outcome: Option<JobOutcome>,
}

/// Timestamps derived when a job completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobOutcome {
    /// Time the last unit of work finished (s).
    pub completion_time: f64,
    /// `completion_time - arrival_time` (s).
    pub turnaround_time: f64,
    /// `turnaround_time - burst_time` (s).
    pub waiting_time: f64,
}

impl Job {
    /// Creates a pristine job.
    pub fn new(id: JobId, arrival_time: f64, burst_time: f64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            outcome: None,
        }
    }

    /// Consumes up to `slice` seconds of CPU time.
    ///
    /// Returns the time actually executed, which is `slice` clamped to the
    /// remaining work. `remaining_time` never goes below zero.
    pub fn run_for(&mut self, slice: f64) -> f64 {
        let executed = slice.min(self.remaining_time);
        self.remaining_time -= executed;
        executed
    }

    /// Whether all of the job's work has been executed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining_time <= 0.0
    }

    /// Records completion at time `at` and derives turnaround/waiting time.
    pub fn complete(&mut self, at: f64) {
        debug_assert!(
            self.outcome.is_none(),
            "Job {} completed twice in one run",
            self.id
        );
        self.remaining_time = 0.0;
        let turnaround_time = at - self.arrival_time;
        self.outcome = Some(JobOutcome {
            completion_time: at,
            turnaround_time,
            waiting_time: turnaround_time - self.burst_time,
        });
    }

    /// Whether the job has completed in the current run.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn completion_time(&self) -> Option<f64> {
        self.outcome.map(|o| o.completion_time)
    }

    pub fn turnaround_time(&self) -> Option<f64> {
        self.outcome.map(|o| o.turnaround_time)
    }

    pub fn waiting_time(&self) -> Option<f64> {
        self.outcome.map(|o| o.waiting_time)
    }

    /// Whether the job can take part in a simulation.
    ///
    /// Jobs with a non-finite arrival or burst time are never admitted by
    /// any policy and stay incomplete.
    #[inline]
    pub fn is_admissible(&self) -> bool {
        self.arrival_time.is_finite() && self.burst_time.is_finite()
    }

    /// Returns a copy with runtime state reset (remaining = burst, no outcome).
    pub fn pristine(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = Job::new(3, 1.5, 4.0);
        assert_eq!(job.id, 3);
        assert!((job.remaining_time - 4.0).abs() < 1e-10);
        assert!(!job.is_completed());
        assert!(job.completion_time().is_none());
    }

    #[test]
    fn test_run_for_clamps_to_remaining() {
        let mut job = Job::new(0, 0.0, 0.3);
        assert!((job.run_for(0.25) - 0.25).abs() < 1e-10);
        let executed = job.run_for(0.25);
        assert!((executed - 0.05).abs() < 1e-10);
        assert_eq!(job.remaining_time, 0.0);
        assert!(job.is_exhausted());
    }

    #[test]
    fn test_complete_derives_times() {
        let mut job = Job::new(0, 2.0, 3.0);
        job.complete(9.0);
        assert_eq!(job.completion_time(), Some(9.0));
        assert_eq!(job.turnaround_time(), Some(7.0));
        assert_eq!(job.waiting_time(), Some(4.0));
        assert_eq!(job.remaining_time, 0.0);
    }

    #[test]
    fn test_admissible() {
        assert!(Job::new(0, 0.0, 1.0).is_admissible());
        assert!(!Job::new(0, f64::NAN, 1.0).is_admissible());
        assert!(!Job::new(0, 0.0, f64::INFINITY).is_admissible());
    }

    #[test]
    fn test_pristine_resets_runtime_state() {
        let mut job = Job::new(1, 0.0, 5.0);
        job.run_for(2.0);
        job.complete(5.0);

        let fresh = job.pristine();
        assert_eq!(fresh, Job::new(1, 0.0, 5.0));
    }
}
