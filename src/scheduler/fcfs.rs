//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order; equal arrivals keep
//! input order.

use super::{finish, prepare, run_in_order, Algorithm};
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{ProcessSpec, Schedule};

/// Simulates FCFS.
pub fn fcfs(specs: &[ProcessSpec]) -> Result<Schedule> {
    let processes = prepare(specs, &Algorithm::Fcfs)?;
    let engine = RuleEngine::new().with_rule(rules::ArrivalTime);
    let input_order: Vec<usize> = (0..processes.len()).collect();
    let order = engine.sort(&processes, &input_order);

    Ok(finish(run_in_order(processes, &order), &Algorithm::Fcfs))
}
