//! Round-Robin parameter sweep.
//!
//! Runs Round-Robin over every (overhead, quantum) cell of a grid on a fresh
//! copy of the ledger and records the resulting metrics. Cells share no
//! mutable state, so they may run on worker threads; results are always
//! returned in grid order (overhead outer, quantum inner).

use serde::{Deserialize, Serialize};
use std::thread;

use super::PerformanceMetrics;
use crate::dispatching::{RoundRobin, SchedulingPolicy};
use crate::error::{Result, SimError};
use crate::models::JobLedger;

/// Default context-switch overheads (ms).
pub const DEFAULT_OVERHEADS_MS: [u32; 6] = [0, 5, 10, 15, 20, 25];
/// Default quanta (ms).
pub const DEFAULT_QUANTUMS_MS: [u32; 4] = [50, 100, 250, 500];

/// Sweep grid and execution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Context-switch overheads to try (ms). Outer loop.
    pub overheads_ms: Vec<u32>,
    /// Quanta to try (ms). Inner loop.
    pub quantums_ms: Vec<u32>,
    /// Run cells on scoped worker threads.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            overheads_ms: DEFAULT_OVERHEADS_MS.to_vec(),
            quantums_ms: DEFAULT_QUANTUMS_MS.to_vec(),
            parallel: false,
        }
    }
}

impl SweepConfig {
    pub fn with_overheads(mut self, overheads_ms: Vec<u32>) -> Self {
        self.overheads_ms = overheads_ms;
        self
    }

    pub fn with_quantums(mut self, quantums_ms: Vec<u32>) -> Self {
        self.quantums_ms = quantums_ms;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.overheads_ms.len() * self.quantums_ms.len()
    }

    /// `(overhead_ms, quantum_ms)` pairs in grid order.
    pub fn cells(&self) -> Vec<(u32, u32)> {
        self.overheads_ms
            .iter()
            .flat_map(|&o| self.quantums_ms.iter().map(move |&q| (o, q)))
            .collect()
    }
}

/// One sweep cell's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub quantum_ms: u32,
    pub overhead_ms: u32,
    /// Mean waiting time (s).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (s).
    pub avg_turnaround_time: f64,
    /// Final clock value (s).
    pub total_time: f64,
    pub avg_queue_length: f64,
    pub max_queue_length: usize,
    pub preemptions: usize,
}

/// Drives Round-Robin across a [`SweepConfig`] grid.
#[derive(Debug, Clone, Default)]
pub struct ExperimentSweep {
    config: SweepConfig,
}

impl ExperimentSweep {
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs every cell and returns one record per cell in grid order.
    ///
    /// # Errors
    /// - `SimError::EmptyInput` if the ledger has no jobs.
    /// - `SimError::InvalidQuantum` if the grid contains a zero quantum.
    pub fn run(&self, ledger: &JobLedger) -> Result<Vec<SweepRecord>> {
        if ledger.is_empty() {
            return Err(SimError::EmptyInput);
        }

        let policies = self
            .config
            .cells()
            .into_iter()
            .map(|(overhead, quantum)| RoundRobin::new(quantum, overhead))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            cells = policies.len(),
            jobs = ledger.len(),
            parallel = self.config.parallel,
            "Starting Round-Robin sweep"
        );

        if self.config.parallel {
            thread::scope(|scope| {
                let handles: Vec<_> = policies
                    .iter()
                    .map(|policy| scope.spawn(move || run_cell(policy, ledger)))
                    .collect();
                // Joined in spawn order, which is grid order.
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect()
            })
        } else {
            policies.iter().map(|p| run_cell(p, ledger)).collect()
        }
    }
}

fn run_cell(policy: &RoundRobin, ledger: &JobLedger) -> Result<SweepRecord> {
    let run = policy.run(ledger);
    let metrics = PerformanceMetrics::calculate(&run.jobs)?;
    let queue = run.queue.unwrap_or_default();

    tracing::debug!(
        quantum_ms = policy.quantum_ms(),
        overhead_ms = policy.overhead_ms(),
        avg_waiting = metrics.avg_waiting_time,
        total_time = run.total_time,
        "Sweep cell finished"
    );

    Ok(SweepRecord {
        quantum_ms: policy.quantum_ms(),
        overhead_ms: policy.overhead_ms(),
        avg_waiting_time: metrics.avg_waiting_time,
        avg_turnaround_time: metrics.avg_turnaround_time,
        total_time: run.total_time,
        avg_queue_length: queue.average_length,
        max_queue_length: queue.max_length,
        preemptions: run.preemptions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::WorkloadGenerator;

    fn scenario() -> JobLedger {
        JobLedger::from_records([(0.0, 5.0), (1.0, 3.0), (2.0, 8.0), (3.0, 6.0)])
    }

    #[test]
    fn test_default_grid() {
        let config = SweepConfig::default();
        assert_eq!(config.cell_count(), 24);
        let cells = config.cells();
        assert_eq!(cells[0], (0, 50));
        assert_eq!(cells[1], (0, 100));
        assert_eq!(cells[4], (5, 50));
        assert_eq!(cells[23], (25, 500));
    }

    #[test]
    fn test_sweep_record_per_cell_in_grid_order() {
        let records = ExperimentSweep::default().run(&scenario()).unwrap();
        assert_eq!(records.len(), 24);

        let cells: Vec<(u32, u32)> = records
            .iter()
            .map(|r| (r.overhead_ms, r.quantum_ms))
            .collect();
        assert_eq!(cells, SweepConfig::default().cells());
    }

    #[test]
    fn test_sweep_cells_reproducible() {
        let ledger = scenario();
        let records = ExperimentSweep::default().run(&ledger).unwrap();

        for record in &records {
            let rr = RoundRobin::new(record.quantum_ms, record.overhead_ms).unwrap();
            let run = rr.run(&ledger);
            let metrics = run.metrics().unwrap();
            assert_eq!(metrics.avg_waiting_time, record.avg_waiting_time);
            assert_eq!(run.total_time, record.total_time);
        }
    }

    #[test]
    fn test_overhead_never_helps() {
        let records = ExperimentSweep::default().run(&scenario()).unwrap();
        for quantum in DEFAULT_QUANTUMS_MS {
            let totals: Vec<f64> = records
                .iter()
                .filter(|r| r.quantum_ms == quantum)
                .map(|r| r.total_time)
                .collect();
            assert!(totals.windows(2).all(|w| w[0] <= w[1]), "quantum {quantum}: {totals:?}");
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let ledger = WorkloadGenerator::new(30).with_seed(11).generate();
        let sequential = ExperimentSweep::default().run(&ledger).unwrap();
        let parallel = ExperimentSweep::new(SweepConfig::default().with_parallel(true))
            .run(&ledger)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_sweep_empty_ledger() {
        assert!(matches!(
            ExperimentSweep::default().run(&JobLedger::new()),
            Err(SimError::EmptyInput)
        ));
    }

    #[test]
    fn test_sweep_zero_quantum() {
        let config = SweepConfig::default().with_quantums(vec![100, 0]);
        assert!(matches!(
            ExperimentSweep::new(config).run(&scenario()),
            Err(SimError::InvalidQuantum(0))
        ));
    }

    #[test]
    fn test_custom_grid() {
        let config = SweepConfig::default()
            .with_overheads(vec![0])
            .with_quantums(vec![1000]);
        let records = ExperimentSweep::new(config).run(&scenario()).unwrap();
        assert_eq!(records.len(), 1);
        // 1s quantum, no overhead: last job finishes when all work is done.
        assert!((records[0].total_time - 22.0).abs() < 1e-10);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SweepConfig = serde_json::from_str(r#"{"quantums_ms": [10, 20]}"#).unwrap();
        assert_eq!(config.quantums_ms, vec![10, 20]);
        assert_eq!(config.overheads_ms, DEFAULT_OVERHEADS_MS.to_vec());
        assert!(!config.parallel);
    }

    #[test]
    fn test_record_serializes() {
        let records = ExperimentSweep::default().run(&scenario()).unwrap();
        let json = serde_json::to_string(&records[0]).unwrap();
        assert!(json.contains("\"quantum_ms\":50"));
        let back: SweepRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.overhead_ms, records[0].overhead_ms);
        assert_eq!(back.max_queue_length, records[0].max_queue_length);
        assert!((back.avg_waiting_time - records[0].avg_waiting_time).abs() < 1e-9);
    }
}
