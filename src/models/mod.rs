//! Simulation domain models.
//!
//! Provides the job description shared by every dispatching policy, the
//! immutable ledger jobs are read into, and the execution timeline a run
//! produces.
//!
//! # Lifecycle
//!
//! | Stage | Type | Mutability |
//! |-------|------|------------|
//! | Input | `JobLedger` | Immutable, shared by all runs |
//! | Run | `Vec<Job>` (working copy) | Owned by one policy run |
//! | Trace | `Timeline` | Appended by the running policy |

mod job;
mod ledger;
mod timeline;

pub use job::{Job, JobId, JobOutcome};
pub use ledger::JobLedger;
pub use timeline::{Slice, Timeline};
