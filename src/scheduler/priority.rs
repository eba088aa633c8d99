//! Non-preemptive static priority.
//!
//! The dispatch order is fixed up front: lowest priority value first, then
//! earliest arrival, then input order. Arrivals are not re-examined while
//! the batch runs, so a late, important process still precedes earlier,
//! less important ones and the CPU idles until it arrives.

use super::{finish, prepare, run_in_order, Algorithm};
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{ProcessSpec, Schedule};

/// Simulates non-preemptive priority scheduling.
pub fn priority(specs: &[ProcessSpec]) -> Result<Schedule> {
    let processes = prepare(specs, &Algorithm::Priority)?;
    let engine = RuleEngine::new()
        .with_rule(rules::PriorityValue)
        .with_rule(rules::ArrivalTime);
    let input_order: Vec<usize> = (0..processes.len()).collect();
    let order = engine.sort(&processes, &input_order);

    Ok(finish(run_in_order(processes, &order), &Algorithm::Priority))
}
