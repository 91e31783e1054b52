//! CPU dispatching policies.
//!
//! Provides the three classical single-CPU disciplines behind a common
//! [`SchedulingPolicy`] trait:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `Fcfs` | No | Ledger order |
//! | `Sjf` | No | Shortest burst among arrived jobs, ties by id |
//! | `RoundRobin` | Yes | FIFO ready queue, fixed quantum + switch overhead |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{Fcfs, SchedulingPolicy};
//! use u_cpusched::models::JobLedger;
//!
//! let ledger = JobLedger::from_records([(0.0, 5.0), (1.0, 3.0)]);
//! let run = Fcfs.run(&ledger);
//! let metrics = run.metrics().unwrap();
//! assert!((metrics.avg_waiting_time - 2.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod context;
mod fcfs;
mod round_robin;
mod sjf;

pub use context::{Arrivals, SimClock};
pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::analysis::PerformanceMetrics;
use crate::error::Result;
use crate::models::{Job, JobLedger, Timeline};

/// A single-CPU dispatching discipline.
///
/// Implementations must be total over any ledger: they take a private
/// working copy, run it to completion and never mutate the ledger itself.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs a full simulation over a fresh copy of `ledger`.
    fn run(&self, ledger: &JobLedger) -> SimulationRun;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Ready-queue occupancy sampled once per dispatch iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Number of iterations sampled (idle steps included).
    pub samples: u64,
    /// Mean sampled queue length; 0 when nothing was sampled.
    pub average_length: f64,
    /// Largest sampled queue length.
    pub max_length: usize,
}

/// Result of one policy run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Name of the policy that produced this run.
    pub policy: String,
    /// Working copy of the jobs with outcomes filled in.
    pub jobs: Vec<Job>,
    /// Dispatch trace.
    pub timeline: Timeline,
    /// Final clock value (s).
    pub total_time: f64,
    /// Number of times a job was preempted and re-queued.
    pub preemptions: usize,
    /// Total context-switch overhead charged to the clock (s).
    pub overhead_time: f64,
    /// Ready-queue statistics (preemptive policies only).
    pub queue: Option<QueueStats>,
}

impl SimulationRun {
    pub(crate) fn new(policy: &str, jobs: Vec<Job>, timeline: Timeline, total_time: f64) -> Self {
        Self {
            policy: policy.to_string(),
            jobs,
            timeline,
            total_time,
            preemptions: 0,
            overhead_time: 0.0,
            queue: None,
        }
    }

    /// Average waiting/turnaround over the run's jobs.
    pub fn metrics(&self) -> Result<PerformanceMetrics> {
        PerformanceMetrics::calculate(&self.jobs)
    }

    /// Whether every job finished.
    pub fn all_completed(&self) -> bool {
        self.jobs.iter().all(Job::is_completed)
    }
}
