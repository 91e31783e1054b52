//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Admit every job whose arrival time is at or before the clock.
//! 2. If nothing is ready, idle until the next arrival.
//! 3. Otherwise dispatch the ready job with the smallest `(burst_time, id)`
//!    and run it to completion.
//!
//! # Complexity
//! O(n log n) using a min-heap ready set.
//!
//! # Reference
//! Smith (1956), SPT minimizes mean flow time on a single machine.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::{Arrivals, SchedulingPolicy, SimClock, SimulationRun};
use crate::models::{JobId, JobLedger, Slice, Timeline};

/// Ready-set key: shorter burst first, then lower id.
#[derive(Debug, Clone, Copy)]
struct BurstKey {
    burst_time: f64,
    id: JobId,
}

impl PartialEq for BurstKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BurstKey {}

impl PartialOrd for BurstKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BurstKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.burst_time
            .total_cmp(&other.burst_time)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Shortest-Job-First (non-preemptive).
///
/// At every dispatch point picks the arrived job with the minimum burst
/// time; equal bursts resolve to the lowest id.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, ledger: &JobLedger) -> SimulationRun {
        let mut jobs = ledger.working_copy();
        let mut timeline = Timeline::new();
        let mut clock = SimClock::new();
        let mut arrivals = Arrivals::new(&jobs);
        // BinaryHeap is a max-heap, so keys are wrapped in Reverse
        let mut ready: BinaryHeap<Reverse<BurstKey>> = BinaryHeap::new();

        loop {
            for id in arrivals.admit(clock.now()) {
                ready.push(Reverse(BurstKey {
                    burst_time: jobs[id].burst_time,
                    id,
                }));
            }

            let Some(Reverse(next)) = ready.pop() else {
                match arrivals.next_arrival() {
                    Some(t) => {
                        clock.idle_until(t);
                        continue;
                    }
                    None => break,
                }
            };

            let job = &mut jobs[next.id];
            let start = clock.now();
            clock.advance(job.run_for(job.burst_time));
            job.complete(clock.now());
            timeline.record(Slice::new(job.id, start, clock.now()));

            tracing::trace!(job_id = job.id, burst = job.burst_time, start, "SJF dispatch");
        }

        tracing::debug!(jobs = jobs.len(), total_time = clock.now(), "SJF run finished");
        SimulationRun::new(self.name(), jobs, timeline, clock.now())
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}
