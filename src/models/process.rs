//! Process model.
//!
//! A [`ProcessSpec`] is the caller-supplied descriptor; a [`Process`] is the
//! mutable simulation record built from it and owned by exactly one
//! algorithm run.
//!
//! # Time Representation
//! All times are integral time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied description of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important). Only read by the
    /// Priority algorithm.
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a descriptor with priority 0.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// One simulated process.
///
/// `remaining_time` only decreases, `start_time` and `completion_time` are
/// each recorded once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Identifier assigned in input order, starting at 1.
    pub id: usize,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required; constant for the run.
    pub burst_time: i64,
    /// CPU time still required.
    pub remaining_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// Time at which `remaining_time` reached 0.
    pub completion_time: Option<i64>,
}

impl Process {
    /// Creates a fresh, unstarted process from a descriptor.
    pub fn new(id: usize, spec: &ProcessSpec) -> Self {
        Self {
            id,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            remaining_time: spec.burst_time,
            priority: spec.priority,
            start_time: None,
            completion_time: None,
        }
    }

    /// Builds the process set for a run, numbering from 1.
    pub fn from_specs(specs: &[ProcessSpec]) -> Vec<Self> {
        specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Self::new(i + 1, spec))
            .collect()
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether all work is done.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process is eligible to run at `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival_time <= time && !self.is_finished()
    }

    /// Records the first dispatch. Later calls keep the original start.
    ///
    /// Returns the recorded start time.
    pub fn start(&mut self, time: i64) -> i64 {
        let arrival = self.arrival_time;
        *self.start_time.get_or_insert_with(|| time.max(arrival))
    }

    /// Runs the process for up to `amount` units.
    ///
    /// Returns the time actually executed, never more than what remains.
    pub fn execute(&mut self, amount: i64) -> i64 {
        let ran = amount.clamp(0, self.remaining_time);
        self.remaining_time -= ran;
        ran
    }

    /// Records completion at `time`. Only valid once `remaining_time` is 0.
    pub fn complete(&mut self, time: i64) {
        debug_assert!(self.is_finished(), "P{} completed with work left", self.id);
        if self.completion_time.is_none() {
            self.completion_time = Some(time);
        }
    }

    /// Completion minus arrival.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Turnaround minus burst.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// First start minus arrival.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_specs_numbers_from_one() {
        let procs = Process::from_specs(&[ProcessSpec::new(0, 5), ProcessSpec::new(3, 2)]);
        assert_eq!(procs[0].id, 1);
        assert_eq!(procs[1].id, 2);
        assert_eq!(procs[1].remaining_time, 2);
        assert!(!procs[0].is_started());
        assert_eq!(procs[1].to_string(), "P2");
    }

    #[test]
    fn test_start_recorded_once() {
        let mut p = Process::new(1, &ProcessSpec::new(4, 3));
        assert_eq!(p.start(2), 4); // clock before arrival → arrival
        assert_eq!(p.start(9), 4);
        assert_eq!(p.start_time, Some(4));
    }

    #[test]
    fn test_execute_clamps_to_remaining() {
        let mut p = Process::new(1, &ProcessSpec::new(0, 5));
        assert_eq!(p.execute(2), 2);
        assert_eq!(p.remaining_time, 3);
        assert_eq!(p.execute(10), 3);
        assert_eq!(p.remaining_time, 0);
        assert!(p.is_finished());
        assert!(!p.is_ready_at(100));
    }

    #[test]
    fn test_derived_times() {
        let mut p = Process::new(1, &ProcessSpec::new(2, 3));
        assert_eq!(p.turnaround_time(), None);
        p.start(4);
        p.execute(3);
        p.complete(7);
        p.complete(99);
        assert_eq!(p.completion_time, Some(7));
        assert_eq!(p.turnaround_time(), Some(5));
        assert_eq!(p.waiting_time(), Some(2));
        assert_eq!(p.response_time(), Some(2));
    }

    #[test]
    fn test_spec_priority_defaults_to_zero() {
        let spec: ProcessSpec =
            serde_json::from_str(r#"{"arrival_time": 1, "burst_time": 4}"#).unwrap();
        assert_eq!(spec, ProcessSpec::new(1, 4));
        assert_eq!(spec.with_priority(3).priority, 3);
    }
}
