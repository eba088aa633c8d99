//! Preemptive Shortest-Remaining-Time-First.
//!
//! A unit-tick simulation: the running process is re-selected every time
//! unit, because the next preemption point is not known in advance. Ties
//! on remaining time go to the process that comes first in input order.
//! One trace event is emitted per dispatch, not per tick.

use tracing::trace;

use super::{finish, prepare, Algorithm};
use crate::dispatching::{rules, RuleEngine};
use crate::error::Result;
use crate::models::{ProcessSpec, Schedule};

/// Simulates SRTF.
pub fn srtf(specs: &[ProcessSpec]) -> Result<Schedule> {
    let processes = prepare(specs, &Algorithm::Srtf)?;
    let engine = RuleEngine::new().with_rule(rules::ShortestRemaining);
    let n = processes.len();

    let mut schedule = Schedule::new(processes);
    let mut current_time = 0;
    let mut completed = 0;
    let mut running: Option<usize> = None;

    while completed < n {
        let ready: Vec<usize> = (0..n)
            .filter(|&i| schedule.processes[i].is_ready_at(current_time))
            .collect();

        let Some(idx) = engine.select(&schedule.processes, &ready) else {
            if running.take().is_some() {
                trace!(time = current_time, "idle");
            }
            current_time += 1;
            continue;
        };

        let p = &mut schedule.processes[idx];
        if running.replace(idx) != Some(idx) {
            trace!(process = p.id, time = current_time, remaining = p.remaining_time, "dispatch");
        }
        p.start(current_time);
        p.execute(1);
        let id = p.id;
        let finished = p.is_finished();
        if finished {
            p.complete(current_time + 1);
            running = None;
        }

        schedule.record(id, current_time, current_time + 1);
        current_time += 1;
        if finished {
            completed += 1;
        }
    }

    Ok(finish(schedule, &Algorithm::Srtf))
}
