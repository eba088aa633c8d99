//! Dispatching rules and rule engine for process selection.
//!
//! Every selection the engine makes (FCFS order, Priority order, SJF and
//! SRTF picks) is expressed as a chain of rules with an explicit final
//! tie-breaker: the candidate's position in the slice it was offered in.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine};
//! use cpu_sched::models::{Process, ProcessSpec};
//!
//! let procs = Process::from_specs(&[
//!     ProcessSpec::new(0, 5).with_priority(2),
//!     ProcessSpec::new(1, 3).with_priority(1),
//! ]);
//! let engine = RuleEngine::new()
//!     .with_rule(rules::PriorityValue)
//!     .with_rule(rules::ArrivalTime);
//!
//! assert_eq!(engine.sort(&procs, &[0, 1]), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A rule that ranks processes competing for the CPU.
///
/// # Score Convention
/// **Lower score = higher precedence.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT").
    fn name(&self) -> &'static str;

    /// Scores a process; lower is dispatched first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
