//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classical single-CPU dispatching disciplines over a fixed job
//! set and reports waiting/turnaround performance.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `JobLedger`, `Timeline`, `Slice`
//! - **`dispatching`**: Policies: `Fcfs`, `Sjf`, `RoundRobin` behind
//!   the `SchedulingPolicy` trait
//! - **`analysis`**: `PerformanceMetrics`, the Round-Robin `ExperimentSweep`,
//!   and the full `Comparison`
//! - **`input`**: Two-column `(arrival, burst)` record parsing
//! - **`validation`**: Input integrity checks (negative / non-finite times, grids)
//! - **`workload`**: Seeded synthetic job generation
//! - **`report`**: Text and JSON rendering
//!
//! # Time Units
//!
//! Engine times are seconds (`f64`). Round-Robin quantum and overhead are
//! configured in whole milliseconds and converted once when the policy is
//! built.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod analysis;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod validation;
pub mod workload;

pub use error::{Result, SimError};
