//! Rule engine for multi-key process selection.
//!
//! Rules are applied lexicographically: the next rule is consulted only
//! when all earlier ones tie. Once every rule ties, the candidate that
//! appears first in the offered slice wins.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule chain.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestRemaining)
///     .with_rule(rules::ArrivalTime);
/// assert_eq!(engine.rule_names(), vec!["SRT", "FIFO"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure candidate order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes by the rule chain alone.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Orders `candidates` (indices into `processes`) by precedence.
    ///
    /// Full ties keep candidate order.
    pub fn sort(&self, processes: &[Process], candidates: &[usize]) -> Vec<usize> {
        let mut ranked: Vec<(usize, usize)> = candidates.iter().copied().enumerate().collect();
        ranked.sort_by(|&(pos_a, a), &(pos_b, b)| {
            self.compare(&processes[a], &processes[b])
                .then(pos_a.cmp(&pos_b))
        });
        ranked.into_iter().map(|(_, idx)| idx).collect()
    }

    /// Picks the highest-precedence candidate, or `None` if there are none.
    ///
    /// Full ties go to the earliest candidate.
    pub fn select(&self, processes: &[Process], candidates: &[usize]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &idx in candidates {
            match best {
                Some(b) if self.compare(&processes[idx], &processes[b]) != Ordering::Less => {}
                _ => best = Some(idx),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::ProcessSpec;

    fn sample() -> Vec<Process> {
        Process::from_specs(&[
            ProcessSpec::new(2, 8).with_priority(1),
            ProcessSpec::new(0, 3).with_priority(2),
            ProcessSpec::new(1, 3).with_priority(1),
            ProcessSpec::new(0, 8).with_priority(2),
        ])
    }

    #[test]
    fn test_empty_engine_keeps_candidate_order() {
        let procs = sample();
        let engine = RuleEngine::new();
        assert_eq!(engine.sort(&procs, &[2, 0, 3]), vec![2, 0, 3]);
        assert_eq!(engine.select(&procs, &[3, 1]), Some(3));
    }

    #[test]
    fn test_sort_by_arrival_ties_in_candidate_order() {
        let procs = sample();
        let engine = RuleEngine::new().with_rule(rules::ArrivalTime);
        assert_eq!(engine.sort(&procs, &[0, 1, 2, 3]), vec![1, 3, 2, 0]);
        assert_eq!(engine.sort(&procs, &[3, 2, 1, 0]), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_secondary_rule_breaks_ties() {
        let procs = sample();
        let engine = RuleEngine::new()
            .with_rule(rules::PriorityValue)
            .with_rule(rules::ArrivalTime);
        assert_eq!(engine.sort(&procs, &[0, 1, 2, 3]), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_select_first_minimum() {
        let procs = sample();
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.select(&procs, &[0, 2, 1]), Some(2));
        assert_eq!(engine.select(&procs, &[0, 1, 2]), Some(1));
        assert_eq!(engine.select(&procs, &[]), None);
    }
}
