//! First-Come-First-Served.
//!
//! Jobs are served strictly in ledger order, each to completion. The clock
//! jumps forward to a job's arrival when the CPU would otherwise be idle, so
//! a later-arriving job listed earlier is served before an earlier-arriving
//! job listed after it.

use super::{SchedulingPolicy, SimClock, SimulationRun};
use crate::models::{JobLedger, Slice, Timeline};

/// First-Come-First-Served (non-preemptive, ledger order).
///
/// Depends only on ledger order and arrival times; burst times never affect
/// which job runs next. O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, ledger: &JobLedger) -> SimulationRun {
        let mut jobs = ledger.working_copy();
        let mut timeline = Timeline::new();
        let mut clock = SimClock::new();

        for job in jobs.iter_mut().filter(|j| j.is_admissible()) {
            if clock.now() < job.arrival_time {
                clock.advance(job.arrival_time - clock.now());
            }

            let start = clock.now();
            clock.advance(job.run_for(job.burst_time));
            job.complete(clock.now());
            timeline.record(Slice::new(job.id, start, clock.now()));

            tracing::trace!(job_id = job.id, start, end = clock.now(), "FCFS dispatch");
        }

        tracing::debug!(jobs = jobs.len(), total_time = clock.now(), "FCFS run finished");
        SimulationRun::new(self.name(), jobs, timeline, clock.now())
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
