//! Error types for simulation and metrics.
//!
//! Every failure is surfaced as a recoverable [`SchedError`]; the library
//! never panics on bad input.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SchedError>;

/// Errors produced by the scheduling engine and the metrics calculator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedError {
    /// Descriptors or algorithm parameters violate the engine's preconditions.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// No processes were supplied.
    #[error("process set is empty")]
    EmptyProcessSet,

    /// `max(completion) - min(arrival)` is not positive, so utilization and
    /// throughput have no meaningful denominator.
    #[error("degenerate metrics: observation span is {span}")]
    DegenerateMetrics { span: i64 },

    /// Metrics were requested for a process that never ran to completion.
    #[error("process P{id} has not completed")]
    IncompleteProcess { id: usize },
}

impl SchedError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SchedError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
