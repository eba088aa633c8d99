//! Multi-Level Feedback Queue.
//!
//! # Algorithm
//! 1. Processes enter level 1 once, when the clock first reaches their
//!    arrival.
//! 2. Serve the highest non-empty level. Bounded levels grant their
//!    quantum; the last level runs the process to completion.
//! 3. After each dispatch, admit the processes that arrived meanwhile.
//! 4. A process that used its whole quantum without finishing moves down
//!    one level.
//! 5. With every level empty, idle one time unit.
//!
//! With the default layout the quanta are 4, 8, then run-to-completion.

use std::collections::VecDeque;

use tracing::trace;

use super::{admit_arrivals, finish, prepare, Algorithm, MlfqConfig};
use crate::error::Result;
use crate::models::{ProcessSpec, Schedule};

/// Simulates MLFQ with the given level layout.
pub fn mlfq(specs: &[ProcessSpec], config: &MlfqConfig) -> Result<Schedule> {
    let algorithm = Algorithm::Mlfq(config.clone());
    let processes = prepare(specs, &algorithm)?;
    let n = processes.len();
    let last_level = config.levels() - 1;

    let mut schedule = Schedule::new(processes);
    let mut admitted = vec![false; n];
    let mut levels: Vec<VecDeque<usize>> = vec![VecDeque::new(); config.levels()];
    let mut current_time = 0;
    let mut completed = 0;

    while completed < n {
        levels[0].extend(admit_arrivals(
            &schedule.processes,
            &mut admitted,
            current_time,
        ));

        let next = levels
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|idx| (level, idx)));
        let Some((level, idx)) = next else {
            trace!(time = current_time, "idle");
            current_time += 1;
            continue;
        };

        let p = &mut schedule.processes[idx];
        p.start(current_time);
        let quantum = config.quantum(level).unwrap_or(p.remaining_time);
        let start = current_time;
        let end = start + p.execute(quantum);
        let id = p.id;
        let finished = p.is_finished();
        if finished {
            p.complete(end);
        }

        trace!(process = id, level = level + 1, start, end, finished, "dispatch");
        schedule.record(id, start, end);
        current_time = end;

        levels[0].extend(admit_arrivals(
            &schedule.processes,
            &mut admitted,
            current_time,
        ));
        if finished {
            completed += 1;
        } else {
            levels[(level + 1).min(last_level)].push_back(idx);
        }
    }

    Ok(finish(schedule, &algorithm))
}
