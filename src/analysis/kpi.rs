//! Performance metrics (KPIs) over a completed job set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean of (turnaround - burst) |
//! | Avg Turnaround Time | Mean of (completion - arrival) |
//! | Max Waiting Time | Largest single wait |
//! | Makespan | Latest completion time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::Job;

/// Aggregate performance indicators.
///
/// All time values are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Number of jobs aggregated.
    pub job_count: usize,
    /// Mean waiting time (s).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (s).
    pub avg_turnaround_time: f64,
    /// Largest waiting time of any single job (s).
    pub max_waiting_time: f64,
    /// Latest completion time (s).
    pub makespan: f64,
}

impl PerformanceMetrics {
    /// Computes metrics from jobs that have all been run to completion.
    ///
    /// # Errors
    /// - `SimError::EmptyInput` if `jobs` is empty.
    /// - `SimError::IncompleteJob` for the first job without an outcome.
    pub fn calculate(jobs: &[Job]) -> Result<Self> {
        if jobs.is_empty() {
            return Err(SimError::EmptyInput);
        }

        let mut total_waiting = 0.0;
        let mut total_turnaround = 0.0;
        let mut max_waiting = f64::MIN;
        let mut makespan: f64 = 0.0;

        for job in jobs {
            let outcome = job.outcome.ok_or(SimError::IncompleteJob(job.id))?;
            total_waiting += outcome.waiting_time;
            total_turnaround += outcome.turnaround_time;
            max_waiting = max_waiting.max(outcome.waiting_time);
            makespan = makespan.max(outcome.completion_time);
        }

        let n = jobs.len() as f64;
        Ok(Self {
            job_count: jobs.len(),
            avg_waiting_time: total_waiting / n,
            avg_turnaround_time: total_turnaround / n,
            max_waiting_time: max_waiting,
            makespan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: usize, arrival: f64, burst: f64, completion: f64) -> Job {
        let mut job = Job::new(id, arrival, burst);
        job.complete(completion);
        job
    }

    #[test]
    fn test_metrics_basic() {
        let jobs = vec![completed(0, 0.0, 2.0, 2.0), completed(1, 1.0, 3.0, 5.0)];
        let metrics = PerformanceMetrics::calculate(&jobs).unwrap();

        assert_eq!(metrics.job_count, 2);
        // waits: 0, 1 → 0.5; turnarounds: 2, 4 → 3
        assert!((metrics.avg_waiting_time - 0.5).abs() < 1e-10);
        assert!((metrics.avg_turnaround_time - 3.0).abs() < 1e-10);
        assert!((metrics.max_waiting_time - 1.0).abs() < 1e-10);
        assert!((metrics.makespan - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        assert!(matches!(
            PerformanceMetrics::calculate(&[]),
            Err(SimError::EmptyInput)
        ));
    }

    #[test]
    fn test_metrics_incomplete_job() {
        let jobs = vec![completed(0, 0.0, 1.0, 1.0), Job::new(1, 0.0, 1.0)];
        assert!(matches!(
            PerformanceMetrics::calculate(&jobs),
            Err(SimError::IncompleteJob(1))
        ));
    }

    #[test]
    fn test_metrics_single_job() {
        let jobs = vec![completed(0, 0.0, 4.0, 4.0)];
        let metrics = PerformanceMetrics::calculate(&jobs).unwrap();
        assert_eq!(metrics.avg_waiting_time, 0.0);
        assert_eq!(metrics.avg_turnaround_time, 4.0);
    }
}
