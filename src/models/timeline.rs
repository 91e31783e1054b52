//! Execution timeline (dispatch trace).
//!
//! Every time a policy hands the CPU to a job it records a [`Slice`].
//! Non-preemptive policies produce one slice per job; Round-Robin produces
//! one per quantum.

use serde::{Deserialize, Serialize};

use super::JobId;

/// Contiguous CPU time granted to one job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Dispatched job.
    pub job_id: JobId,
    /// Dispatch time (s).
    pub start: f64,
    /// End of execution, excluding any context-switch overhead (s).
    pub end: f64,
}

impl Slice {
    pub fn new(job_id: JobId, start: f64, end: f64) -> Self {
        Self { job_id, start, end }
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Ordered list of dispatched slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// All slices granted to one job, in dispatch order.
    pub fn slices_for_job(&self, job_id: JobId) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.job_id == job_id).collect()
    }

    /// Job ids in dispatch order (a job appears once per slice).
    pub fn dispatch_order(&self) -> Vec<JobId> {
        self.slices.iter().map(|s| s.job_id).collect()
    }

    /// Latest slice end (s), 0 for an empty timeline.
    pub fn makespan(&self) -> f64 {
        self.slices.iter().map(|s| s.end).fold(0.0, f64::max)
    }

    /// Total time the CPU spent executing jobs (s).
    pub fn busy_time(&self) -> f64 {
        self.slices.iter().map(Slice::duration).sum()
    }
}
