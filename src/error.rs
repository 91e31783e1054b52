use thiserror::Error;

use crate::models::JobId;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("No jobs to evaluate: the job set is empty")]
    EmptyInput,

    #[error("Job {0} has not completed")]
    IncompleteJob(JobId),

    #[error("Round-Robin quantum must be positive (got {0}ms)")]
    InvalidQuantum(u32),

    #[error("Invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SimError>;
