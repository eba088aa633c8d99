//! Round Robin.
//!
//! # Algorithm
//! 1. Queue newly arrived processes in input order.
//! 2. Run the head for `min(remaining, quantum)`.
//! 3. Queue every process that arrived during that slice, **then** put the
//!    preempted process at the tail. A process arriving exactly when a
//!    slice ends is therefore served before the one just preempted.
//! 4. With an empty queue, idle one time unit.

use std::collections::VecDeque;

use tracing::trace;

use super::{admit_arrivals, finish, prepare, Algorithm};
use crate::error::Result;
use crate::models::{ProcessSpec, Schedule};

/// Simulates Round Robin with the given quantum.
pub fn round_robin(specs: &[ProcessSpec], quantum: i64) -> Result<Schedule> {
    let algorithm = Algorithm::RoundRobin { quantum };
    let processes = prepare(specs, &algorithm)?;
    let n = processes.len();

    let mut schedule = Schedule::new(processes);
    let mut admitted = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut current_time = 0;
    let mut completed = 0;

    while completed < n {
        queue.extend(admit_arrivals(
            &schedule.processes,
            &mut admitted,
            current_time,
        ));

        let Some(idx) = queue.pop_front() else {
            trace!(time = current_time, "idle");
            current_time += 1;
            continue;
        };

        let p = &mut schedule.processes[idx];
        p.start(current_time);
        let start = current_time;
        let end = start + p.execute(quantum);
        let id = p.id;
        let finished = p.is_finished();
        if finished {
            p.complete(end);
        }

        trace!(process = id, start, end, finished, "dispatch");
        schedule.record(id, start, end);
        current_time = end;

        queue.extend(admit_arrivals(
            &schedule.processes,
            &mut admitted,
            current_time,
        ));
        if finished {
            completed += 1;
        } else {
            queue.push_back(idx);
        }
    }

    Ok(finish(schedule, &algorithm))
}
