//! Round-Robin with fixed quantum and context-switch overhead.
//!
//! # Algorithm
//!
//! Each iteration:
//! 1. Enqueue newly arrived jobs (ledger order) at the tail of the ready queue.
//! 2. Sample the ready-queue length.
//! 3. If the queue is empty, idle one second and retry.
//! 4. Otherwise run the head job for `min(quantum, remaining)`.
//! 5. A finished job completes; an unfinished one is charged the overhead
//!    and re-enqueued at the tail.
//!
//! Jobs arriving during a slice are enqueued behind the preempted job.

use std::collections::VecDeque;

use super::{Arrivals, QueueStats, SchedulingPolicy, SimClock, SimulationRun};
use crate::error::{Result, SimError};
use crate::models::{JobId, JobLedger, Slice, Timeline};

/// Converts a millisecond parameter to the engine's time unit (s).
#[inline]
fn ms_to_secs(ms: u32) -> f64 {
    f64::from(ms) / 1000.0
}

/// Preemptive Round-Robin.
///
/// Parameters are given in milliseconds and converted to seconds once, at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRobin {
    quantum_ms: u32,
    overhead_ms: u32,
    quantum: f64,
    overhead: f64,
}

impl RoundRobin {
    /// Creates a policy with the given quantum and switch overhead (ms).
    ///
    /// # Errors
    /// `SimError::InvalidQuantum` if `quantum_ms` is zero.
    pub fn new(quantum_ms: u32, overhead_ms: u32) -> Result<Self> {
        if quantum_ms == 0 {
            return Err(SimError::InvalidQuantum(quantum_ms));
        }
        Ok(Self {
            quantum_ms,
            overhead_ms,
            quantum: ms_to_secs(quantum_ms),
            overhead: ms_to_secs(overhead_ms),
        })
    }

    pub fn quantum_ms(&self) -> u32 {
        self.quantum_ms
    }

    pub fn overhead_ms(&self) -> u32 {
        self.overhead_ms
    }

    /// Quantum in seconds.
    pub fn quantum(&self) -> f64 {
        self.quantum
    }

    /// Context-switch overhead in seconds.
    pub fn overhead(&self) -> f64 {
        self.overhead
    }
}

/// Running ready-queue occupancy counters.
#[derive(Debug, Default)]
struct QueueSampler {
    samples: u64,
    sum: u64,
    max: usize,
}

impl QueueSampler {
    fn sample(&mut self, len: usize) {
        self.samples = self.samples.saturating_add(1);
        self.sum = self.sum.saturating_add(len as u64);
        self.max = self.max.max(len);
    }

    /// Accounts for idle iterations, each of which samples an empty queue.
    fn sample_idle(&mut self, steps: u64) {
        self.samples = self.samples.saturating_add(steps);
    }

    fn finish(self) -> QueueStats {
        let average_length = if self.samples == 0 {
            0.0
        } else {
            self.sum as f64 / self.samples as f64
        };
        QueueStats {
            samples: self.samples,
            average_length,
            max_length: self.max,
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, ledger: &JobLedger) -> SimulationRun {
        let mut jobs = ledger.working_copy();
        let mut timeline = Timeline::new();
        let mut clock = SimClock::new();
        let mut arrivals = Arrivals::new(&jobs);
        let mut outstanding = arrivals.pending();
        let mut ready: VecDeque<JobId> = VecDeque::with_capacity(jobs.len());
        let mut sampler = QueueSampler::default();
        let mut preemptions = 0usize;
        let mut overhead_time = 0.0;

        while outstanding > 0 {
            ready.extend(arrivals.admit(clock.now()));
            sampler.sample(ready.len());

            let Some(id) = ready.pop_front() else {
                let Some(next_arrival) = arrivals.next_arrival() else {
                    break;
                };
                // The sample above covers the first idle step.
                let steps = clock.idle_until(next_arrival);
                sampler.sample_idle(steps - 1);
                continue;
            };

            let job = &mut jobs[id];
            let start = clock.now();
            clock.advance(job.run_for(self.quantum));
            timeline.record(Slice::new(id, start, clock.now()));

            if job.is_exhausted() {
                job.complete(clock.now());
                outstanding -= 1;
                tracing::trace!(job_id = id, completion = clock.now(), "RR job completed");
            } else {
                clock.advance(self.overhead);
                overhead_time += self.overhead;
                preemptions += 1;
                ready.push_back(id);
                tracing::trace!(job_id = id, remaining = job.remaining_time, "RR preempt");
            }
        }

        tracing::debug!(
            quantum_ms = self.quantum_ms,
            overhead_ms = self.overhead_ms,
            total_time = clock.now(),
            preemptions,
            "RR run finished"
        );

        let mut run = SimulationRun::new(self.name(), jobs, timeline, clock.now());
        run.preemptions = preemptions;
        run.overhead_time = overhead_time;
        run.queue = Some(sampler.finish());
        run
    }

    fn description(&self) -> &'static str {
        "Round Robin (time-sliced, with context-switch overhead)"
    }
}
