//! Synthetic workload generation.
//!
//! Produces job ledgers with Bernoulli arrivals: at every whole-second tick a
//! job arrives with probability `p_arrival`, and is either short or long with
//! probability `p_short`. Arrival offsets and burst times are drawn at
//! millisecond resolution so generated ledgers exercise non-integer times.
//!
//! Deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::JobLedger;

/// Seeded generator of synthetic job ledgers.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of jobs to generate.
    pub count: usize,
    /// Probability of an arrival at each tick (0.0..=1.0).
    pub p_arrival: f64,
    /// Probability that an arriving job is short (0.0..=1.0).
    pub p_short: f64,
    /// Short burst range (s), inclusive.
    pub short_burst: (f64, f64),
    /// Long burst range (s), inclusive.
    pub long_burst: (f64, f64),
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` jobs with default parameters.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: (0.05, 1.0),
            long_burst: (1.0, 6.0),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.p_arrival = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_short_probability(mut self, p: f64) -> Self {
        self.p_short = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_short_burst(mut self, min: f64, max: f64) -> Self {
        self.short_burst = (min, max);
        self
    }

    pub fn with_long_burst(mut self, min: f64, max: f64) -> Self {
        self.long_burst = (min, max);
        self
    }

    /// Generates the ledger.
    ///
    /// A zero arrival probability still yields `count` jobs: one per tick.
    pub fn generate(&self) -> JobLedger {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut ledger = JobLedger::new();
        let mut tick: u64 = 0;

        while ledger.len() < self.count {
            if self.p_arrival == 0.0 || rng.random_bool(self.p_arrival) {
                let offset = millis(&mut rng, 0.0, 0.999);
                let (min, max) = if rng.random_bool(self.p_short) {
                    self.short_burst
                } else {
                    self.long_burst
                };
                ledger.push(tick as f64 + offset, millis(&mut rng, min, max));
            }
            tick += 1;
        }

        tracing::debug!(jobs = ledger.len(), seed = self.seed, ticks = tick, "Generated workload");
        ledger
    }
}

/// Uniform draw in `[min, max]` rounded to whole milliseconds.
fn millis(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    let lo = (min * 1000.0).round() as u64;
    let hi = ((max * 1000.0).round() as u64).max(lo);
    rng.random_range(lo..=hi) as f64 / 1000.0
}
