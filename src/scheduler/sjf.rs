//! Non-preemptive Shortest-Job-First.
//!
//! # Algorithm
//! 1. Admit every arrived, unfinished process not yet in the ready set.
//! 2. Run the ready process with the smallest burst to completion
//!    (ties: earliest admitted).
//! 3. With nothing ready, idle one time unit.

use tracing::trace;

use super::{admit_arrivals, finish, prepare, Algorithm};
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{ProcessSpec, Schedule};

/// Simulates SJF.
pub fn sjf(specs: &[ProcessSpec]) -> Result<Schedule> {
    let processes = prepare(specs, &Algorithm::Sjf)?;
    let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
    let n = processes.len();

    let mut schedule = Schedule::new(processes);
    let mut admitted = vec![false; n];
    let mut ready: Vec<usize> = Vec::new();
    let mut current_time = 0;
    let mut completed = 0;

    while completed < n {
        ready.extend(admit_arrivals(
            &schedule.processes,
            &mut admitted,
            current_time,
        ));

        let Some(idx) = engine.select(&schedule.processes, &ready) else {
            trace!(time = current_time, "idle");
            current_time += 1;
            continue;
        };
        ready.retain(|&i| i != idx);

        let p = &mut schedule.processes[idx];
        let start = p.start(current_time);
        let burst = p.remaining_time;
        let end = start + p.execute(burst);
        p.complete(end);
        let id = p.id;

        trace!(process = id, start, end, "dispatch");
        schedule.record(id, start, end);
        current_time = end;
        completed += 1;
    }

    Ok(finish(schedule, &Algorithm::Sjf))
}
