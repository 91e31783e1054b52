//! Two-column job records.
//!
//! Input is a whitespace-separated stream of numbers read as
//! `(arrival_time, burst_time)` pairs, one job per pair. Reading stops at the
//! first token that is not a finite number; everything parsed before it is
//! kept. A trailing arrival without a burst is dropped.

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::JobLedger;

/// Where and why reading stopped early.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Truncation {
    /// The token that failed to parse.
    pub token: String,
    /// Zero-based index of that token in the stream.
    pub token_index: usize,
    /// Tokens left unread, the failing one included.
    pub unread_tokens: usize,
}

/// Jobs read from a source plus truncation details, if any.
#[derive(Debug, Clone)]
pub struct LoadedJobs {
    pub ledger: JobLedger,
    pub truncation: Option<Truncation>,
}

impl LoadedJobs {
    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }
}

/// Parses job records from text.
pub fn parse_jobs(text: &str) -> LoadedJobs {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut values = Vec::with_capacity(tokens.len());
    let mut truncation = None;

    for (index, token) in tokens.iter().enumerate() {
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => {
                truncation = Some(Truncation {
                    token: (*token).to_string(),
                    token_index: index,
                    unread_tokens: tokens.len() - index,
                });
                break;
            }
        }
    }

    let ledger: JobLedger = values.chunks_exact(2).map(|p| (p[0], p[1])).collect();

    if let Some(t) = &truncation {
        tracing::warn!(
            token = %t.token,
            token_index = t.token_index,
            unread_tokens = t.unread_tokens,
            jobs = ledger.len(),
            "Job input truncated at non-numeric token"
        );
    }

    LoadedJobs { ledger, truncation }
}

/// Reads and parses job records from a file.
///
/// # Errors
/// `SimError::Io` if the file cannot be read.
pub fn load_jobs(path: impl AsRef<Path>) -> Result<LoadedJobs> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let loaded = parse_jobs(&text);
    tracing::info!(path = %path.display(), jobs = loaded.ledger.len(), "Loaded jobs");
    Ok(loaded)
}

/// Writes a ledger in the two-column record format.
pub fn format_jobs(ledger: &JobLedger) -> String {
    let mut out = String::new();
    for job in ledger.iter() {
        let _ = writeln!(out, "{} {}", job.arrival_time, job.burst_time);
    }
    out
}
