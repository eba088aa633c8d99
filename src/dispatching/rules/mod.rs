//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl DispatchingRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In, First Out (arrival time)"
    }
}

/// Shortest total burst first.
///
/// Minimizes mean waiting time for non-preemptive single-CPU batches.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Shortest remaining work first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl DispatchingRule for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Static priority (lower value first)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn make_process(arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(1, &ProcessSpec::new(arrival, burst).with_priority(priority))
    }

    #[test]
    fn test_arrival_time() {
        assert_eq!(ArrivalTime.evaluate(&make_process(7, 1, 0)), 7);
        assert_eq!(ArrivalTime.name(), "FIFO");
    }

    #[test]
    fn test_shortest_burst_ignores_progress() {
        let mut p = make_process(0, 9, 0);
        p.execute(5);
        assert_eq!(ShortestBurst.evaluate(&p), 9);
        assert_eq!(ShortestRemaining.evaluate(&p), 4);
    }

    #[test]
    fn test_priority_value() {
        assert_eq!(PriorityValue.evaluate(&make_process(0, 1, -3)), -3);
        assert_eq!(
            PriorityValue.description(),
            "Static priority (lower value first)"
        );
    }
}
