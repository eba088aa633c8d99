//! Schedule (simulation result) model.
//!
//! A schedule is the completed process set of one algorithm run together
//! with the execution trace: the contiguous CPU intervals each process held.

use serde::{Deserialize, Serialize};

use super::Process;

/// Result of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Processes in input order, with timing fields populated.
    pub processes: Vec<Process>,
    /// CPU intervals in time order.
    pub slices: Vec<Slice>,
}

/// One contiguous interval during which a process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that ran.
    pub process_id: usize,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: usize, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates a schedule over a process set with an empty trace.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            slices: Vec::new(),
        }
    }

    /// Appends a slice, merging it into the previous one when the same
    /// process continues without a gap. Empty slices are dropped.
    pub fn record(&mut self, process_id: usize, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice::new(process_id, start, end));
    }

    /// Latest slice end (0 for an empty trace).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Finds a process by ID.
    pub fn process(&self, id: usize) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Returns all slices of a given process.
    pub fn slices_for(&self, process_id: usize) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time a process received.
    pub fn executed_time(&self, process_id: usize) -> i64 {
        self.slices_for(process_id).iter().map(|s| s.duration()).sum()
    }

    /// Number of times the process was dispatched after the first
    /// (merged slices count once).
    pub fn preemption_count(&self, process_id: usize) -> usize {
        self.slices_for(process_id).len().saturating_sub(1)
    }

    /// Whether every process ran to completion.
    pub fn is_complete(&self) -> bool {
        self.processes
            .iter()
            .all(|p| p.is_finished() && p.completion_time.is_some())
    }

    /// Consumes the schedule, returning the process set.
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}
