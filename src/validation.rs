//! Input validation for simulation runs.
//!
//! Checks the engine's preconditions before any simulation loop starts.
//! Detects:
//! - Negative arrival times
//! - Zero or negative burst times
//! - Non-positive quanta (Round Robin, MLFQ levels)
//! - Workloads whose clock could exceed `i64::MAX`
//!
//! Malformed text input is reported by the workload parser with the same
//! error type. An empty process set is not a validation error; it is
//! surfaced as [`SchedError::EmptyProcessSet`](crate::SchedError).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ProcessSpec;
use crate::scheduler::Algorithm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or negative time).
    NonPositiveBurst,
    /// A time quantum is zero or negative.
    NonPositiveQuantum,
    /// Input text could not be parsed.
    Malformed,
    /// Arrivals and bursts are large enough to overflow the clock.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates process descriptors.
///
/// Checks, per process (numbered from 1 in input order):
/// 1. `arrival_time >= 0`
/// 2. `burst_time > 0`
///
/// and, for the whole set, that the latest possible clock value
/// (`max(arrival) + Σburst`) fits in an `i64`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, spec) in specs.iter().enumerate() {
        let id = idx + 1;
        if spec.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{id}: arrival time {} is negative", spec.arrival_time),
            ));
        }
        if spec.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{id}: burst time {} must be positive", spec.burst_time),
            ));
        }
    }

    if horizon(specs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound of the simulation clock: no run ends later than the last
/// arrival followed by every burst back to back.
fn horizon(specs: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = specs.iter().map(|s| s.arrival_time.max(0)).max().unwrap_or(0);
    specs
        .iter()
        .try_fold(latest_arrival, |acc, s| acc.checked_add(s.burst_time.max(0)))
}

/// Validates algorithm parameters.
pub fn validate_algorithm(algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();

    match algorithm {
        Algorithm::RoundRobin { quantum } => {
            if *quantum <= 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveQuantum,
                    format!("round robin quantum {quantum} must be positive"),
                ));
            }
        }
        Algorithm::Mlfq(config) => {
            for (level, quantum) in config.level_quanta.iter().enumerate() {
                if *quantum <= 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NonPositiveQuantum,
                        format!("MLFQ level {} quantum {quantum} must be positive", level + 1),
                    ));
                }
            }
        }
        Algorithm::Fcfs | Algorithm::Sjf | Algorithm::Priority | Algorithm::Srtf => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full run request, collecting process and parameter errors
/// together.
pub fn validate_request(specs: &[ProcessSpec], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = validate_processes(specs).err().unwrap_or_default();
    errors.extend(validate_algorithm(algorithm).err().unwrap_or_default());

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
