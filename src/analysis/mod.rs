//! Metrics aggregation and experiments.
//!
//! Provides the per-run performance metrics, the Round-Robin parameter
//! sweep, and a full policy comparison combining both.
//!
//! # Flow
//!
//! ```text
//! JobLedger ─┬─ Fcfs ─────────────┐
//!            ├─ Sjf ──────────────┼─ PerformanceMetrics ─ Comparison
//!            └─ ExperimentSweep ──┘   (RR per grid cell)
//! ```

mod kpi;
mod sweep;

pub use kpi::PerformanceMetrics;
pub use sweep::{
    ExperimentSweep, SweepConfig, SweepRecord, DEFAULT_OVERHEADS_MS, DEFAULT_QUANTUMS_MS,
};

use serde::{Deserialize, Serialize};

use crate::dispatching::{Fcfs, SchedulingPolicy, Sjf};
use crate::error::{Result, SimError};
use crate::models::JobLedger;

/// FCFS and SJF metrics plus the Round-Robin sweep for one ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub job_count: usize,
    pub fcfs: PerformanceMetrics,
    pub sjf: PerformanceMetrics,
    pub round_robin: Vec<SweepRecord>,
}

impl Comparison {
    /// Runs every policy on independent copies of `ledger`.
    ///
    /// # Errors
    /// `SimError::EmptyInput` for an empty ledger; any sweep error.
    pub fn run(ledger: &JobLedger, config: &SweepConfig) -> Result<Self> {
        if ledger.is_empty() {
            return Err(SimError::EmptyInput);
        }

        let fcfs = Fcfs.run(ledger).metrics()?;
        let sjf = Sjf.run(ledger).metrics()?;
        let round_robin = ExperimentSweep::new(config.clone()).run(ledger)?;

        Ok(Self {
            job_count: ledger.len(),
            fcfs,
            sjf,
            round_robin,
        })
    }
}
