//! Input validation for simulations.
//!
//! Checks a job ledger and a sweep configuration before running. Detects:
//! - Negative arrival or burst times
//! - Non-finite (NaN / infinite) times
//! - Zero Round-Robin quanta
//! - Empty sweep grids
//!
//! Policies themselves never reject input; validation is an explicit step
//! callers opt into.

use crate::analysis::SweepConfig;
use crate::models::JobLedger;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An arrival or burst time is below zero.
    NegativeTime,
    /// An arrival or burst time is NaN or infinite.
    NonFiniteTime,
    /// A Round-Robin quantum of zero would never make progress.
    ZeroQuantum,
    /// A sweep grid axis has no values.
    EmptyGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates every job in the ledger.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_ledger(ledger: &JobLedger) -> ValidationResult {
    let mut errors = Vec::new();

    for job in ledger.iter() {
        for (field, value) in [("arrival", job.arrival_time), ("burst", job.burst_time)] {
            if !value.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteTime,
                    format!("Job {} has non-finite {field} time: {value}", job.id),
                ));
            } else if value < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeTime,
                    format!("Job {} has negative {field} time: {value}", job.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a sweep grid.
pub fn validate_sweep(config: &SweepConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.overheads_ms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            "Sweep has no overhead values",
        ));
    }
    if config.quantums_ms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            "Sweep has no quantum values",
        ));
    }
    if config.quantums_ms.contains(&0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "Sweep quantum values must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ledger() {
        let ledger = JobLedger::from_records([(0.0, 5.0), (1.5, 0.0)]);
        assert!(validate_ledger(&ledger).is_ok());
    }

    #[test]
    fn test_empty_ledger_is_valid() {
        assert!(validate_ledger(&JobLedger::new()).is_ok());
    }

    #[test]
    fn test_negative_times() {
        let ledger = JobLedger::from_records([(-1.0, 2.0), (0.0, -3.0)]);
        let errors = validate_ledger(&ledger).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NegativeTime));
        assert!(errors[0].message.contains("arrival"));
        assert!(errors[1].message.contains("burst"));
    }

    #[test]
    fn test_non_finite_times() {
        let ledger = JobLedger::from_records([(f64::NAN, 1.0), (0.0, f64::INFINITY)]);
        let errors = validate_ledger(&ledger).unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonFiniteTime));
    }

    #[test]
    fn test_default_sweep_valid() {
        assert!(validate_sweep(&SweepConfig::default()).is_ok());
    }

    #[test]
    fn test_sweep_errors() {
        let config = SweepConfig::default()
            .with_overheads(vec![])
            .with_quantums(vec![0, 50]);
        let errors = validate_sweep(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyGrid));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroQuantum));
    }
}
