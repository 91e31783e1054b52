//! Simulation context shared by dispatching policies.
//!
//! Holds the logical clock and the arrival cursor that decides which jobs
//! have become eligible to run.

use crate::models::{Job, JobId};

/// Monotonic logical clock (s).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    /// Clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn advance(&mut self, dt: f64) {
        self.now += dt;
    }

    /// Idles the CPU in whole-second steps until `next_arrival` is reached.
    ///
    /// Lands on the same instant as polling one second at a time would, and
    /// returns the number of steps taken (always at least one, saturating at
    /// `u64::MAX` for astronomically distant arrivals).
    pub fn idle_until(&mut self, next_arrival: f64) -> u64 {
        let gap = next_arrival - self.now;
        let steps = if gap > 1.0 { gap.ceil() } else { 1.0 };
        self.now += steps;
        steps as u64
    }
}

/// Arrival cursor over a working job set.
///
/// Jobs are visited in arrival order, but each batch returned by
/// [`admit`](Arrivals::admit) is in ledger (id) order, matching a full scan
/// of the job list at every admission point.
#[derive(Debug, Clone)]
pub struct Arrivals {
    // (arrival_time, id), sorted ascending
    order: Vec<(f64, JobId)>,
    cursor: usize,
}

impl Arrivals {
    /// Builds the cursor. Inadmissible jobs are never admitted.
    pub fn new(jobs: &[Job]) -> Self {
        let mut order: Vec<(f64, JobId)> = jobs
            .iter()
            .filter(|j| j.is_admissible())
            .map(|j| (j.arrival_time, j.id))
            .collect();
        order.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        Self { order, cursor: 0 }
    }

    /// Returns the ids of jobs that arrived at or before `now` and were not
    /// admitted yet, in id order.
    pub fn admit(&mut self, now: f64) -> Vec<JobId> {
        let start = self.cursor;
        while self.cursor < self.order.len() && self.order[self.cursor].0 <= now {
            self.cursor += 1;
        }

        let mut batch: Vec<JobId> = self.order[start..self.cursor]
            .iter()
            .map(|&(_, id)| id)
            .collect();
        batch.sort_unstable();
        batch
    }

    /// Arrival time of the earliest job not admitted yet.
    pub fn next_arrival(&self) -> Option<f64> {
        self.order.get(self.cursor).map(|&(t, _)| t)
    }

    /// Number of jobs still waiting to arrive.
    pub fn pending(&self) -> usize {
        self.order.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_matches_unit_stepping() {
        let cases = [(0.0, 1.5), (0.0, 2.0), (0.3, 2.0), (4.0, 4.5), (7.25, 20.0)];
        for (start, target) in cases {
            let mut polled = start;
            let mut polled_steps = 0;
            while polled < target {
                polled += 1.0;
                polled_steps += 1;
            }

            let mut clock = SimClock { now: start };
            let steps = clock.idle_until(target);
            assert_eq!(steps, polled_steps, "start={start} target={target}");
            assert!((clock.now() - polled).abs() < 1e-9);
        }
    }

    #[test]
    fn test_idle_until_always_steps() {
        let mut clock = SimClock::new();
        assert_eq!(clock.idle_until(0.0), 1);
        assert!((clock.now() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_idle_until_distant_arrival_lands_in_one_jump() {
        let mut clock = SimClock::new();
        let steps = clock.idle_until(1e20);
        assert_eq!(steps, u64::MAX);
        assert!(clock.now() >= 1e20);
    }

    #[test]
    fn test_admit_batches_in_id_order() {
        let jobs = vec![
            Job::new(0, 7.0, 1.0),
            Job::new(1, 5.0, 1.0),
            Job::new(2, 0.0, 1.0),
            Job::new(3, 12.0, 1.0),
        ];
        let mut arrivals = Arrivals::new(&jobs);

        assert_eq!(arrivals.admit(0.0), vec![2]);
        assert_eq!(arrivals.next_arrival(), Some(5.0));
        assert_eq!(arrivals.admit(8.0), vec![0, 1]);
        assert_eq!(arrivals.admit(8.0), Vec::<JobId>::new());
        assert_eq!(arrivals.pending(), 1);
        assert_eq!(arrivals.admit(100.0), vec![3]);
        assert_eq!(arrivals.next_arrival(), None);
    }

    #[test]
    fn test_inadmissible_jobs_skipped() {
        let jobs = vec![Job::new(0, f64::NAN, 1.0), Job::new(1, 0.0, 1.0)];
        let mut arrivals = Arrivals::new(&jobs);
        assert_eq!(arrivals.admit(f64::MAX), vec![1]);
        assert_eq!(arrivals.pending(), 0);
    }
}
