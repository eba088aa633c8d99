//! CPU scheduling algorithms and metrics evaluation.
//!
//! Each algorithm is a pure function from process descriptors (plus its
//! parameters) to a completed [`Schedule`]. All simulation state (clock,
//! queues, admission flags) is local to one call.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Time stepping |
//! |-----------|-----------|---------------|
//! | FCFS | no | jump to next completion |
//! | Priority | no | jump to next completion |
//! | SJF | no | jump, idle ticks of 1 |
//! | Round Robin | yes (quantum) | jump by slice, idle ticks of 1 |
//! | SRTF | yes (every tick) | unit ticks |
//! | MLFQ | yes (per-level quantum) | jump by slice, idle ticks of 1 |
//!
//! Input is validated before simulating; see [`crate::validation`].
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau, "Operating Systems: Three Easy Pieces", Ch. 7-8

mod fcfs;
mod metrics;
mod mlfq;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::fcfs;
pub use metrics::{MetricsReport, ProcessMetrics};
pub use mlfq::mlfq;
pub use priority::priority;
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use srtf::srtf;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::{Result, SchedError};
use crate::models::{Process, ProcessSpec, Schedule};
use crate::validation::{validate_request, ValidationError, ValidationErrorKind};

/// A scheduling discipline and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive Shortest-Job-First.
    Sjf,
    /// Non-preemptive static priority.
    Priority,
    /// Round Robin with a fixed quantum.
    RoundRobin { quantum: i64 },
    /// Preemptive Shortest-Remaining-Time-First.
    Srtf,
    /// Multi-Level Feedback Queue.
    Mlfq(MlfqConfig),
}

impl Algorithm {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::Sjf => "Shortest Job First",
            Self::Priority => "Priority Scheduling",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Srtf => "Shortest Remaining Time First",
            Self::Mlfq(_) => "Multi-Level Feedback Queue",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. } | Self::Srtf | Self::Mlfq(_))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (q={quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Parses short specs: `fcfs`, `sjf`, `priority`, `srtf`, `rr:<q>`,
/// `mlfq` or `mlfq:<q1>,<q2>,...`. Case-insensitive.
impl FromStr for Algorithm {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let (head, arg) = match lower.split_once(':') {
            Some((h, a)) => (h, Some(a)),
            None => (lower.as_str(), None),
        };

        match (head, arg) {
            ("fcfs", None) => Ok(Self::Fcfs),
            ("sjf", None) => Ok(Self::Sjf),
            ("priority", None) => Ok(Self::Priority),
            ("srtf", None) => Ok(Self::Srtf),
            ("rr", Some(q)) => Ok(Self::RoundRobin {
                quantum: parse_quantum(q, s)?,
            }),
            ("mlfq", None) => Ok(Self::Mlfq(MlfqConfig::default())),
            ("mlfq", Some(list)) => {
                let quanta = list
                    .split(',')
                    .map(|q| parse_quantum(q, s))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Mlfq(MlfqConfig::with_quanta(quanta)))
            }
            _ => Err(malformed(format!(
                "unknown algorithm `{s}`: expected fcfs, sjf, priority, srtf, rr:<q> or mlfq[:<q1>,...]"
            ))),
        }
    }
}

fn parse_quantum(field: &str, spec: &str) -> Result<i64> {
    field
        .trim()
        .parse()
        .map_err(|_| malformed(format!("`{spec}`: quantum `{field}` is not an integer")))
}

fn malformed(message: String) -> SchedError {
    SchedError::InvalidInput(vec![ValidationError::new(
        ValidationErrorKind::Malformed,
        message,
    )])
}

/// MLFQ level layout.
///
/// `level_quanta[i]` is the quantum of level `i + 1`. One more level always
/// follows the configured ones and runs its processes to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlfqConfig {
    pub level_quanta: Vec<i64>,
}

impl MlfqConfig {
    /// Creates a layout with the given bounded-level quanta.
    pub fn with_quanta(level_quanta: Vec<i64>) -> Self {
        Self { level_quanta }
    }

    /// Total number of levels, including the run-to-completion level.
    pub fn levels(&self) -> usize {
        self.level_quanta.len() + 1
    }

    /// Quantum of a 0-based level; `None` for the run-to-completion level.
    pub fn quantum(&self, level: usize) -> Option<i64> {
        self.level_quanta.get(level).copied()
    }
}

impl Default for MlfqConfig {
    fn default() -> Self {
        Self {
            level_quanta: vec![4, 8],
        }
    }
}

/// Simulates `specs` under `algorithm`.
pub fn simulate(specs: &[ProcessSpec], algorithm: &Algorithm) -> Result<Schedule> {
    match algorithm {
        Algorithm::Fcfs => fcfs(specs),
        Algorithm::Sjf => sjf(specs),
        Algorithm::Priority => priority(specs),
        Algorithm::RoundRobin { quantum } => round_robin(specs, *quantum),
        Algorithm::Srtf => srtf(specs),
        Algorithm::Mlfq(config) => mlfq(specs, config),
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Process descriptors, in input order.
    pub processes: Vec<ProcessSpec>,
    /// Discipline to simulate.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
        }
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<Schedule> {
        simulate(&self.processes, &self.algorithm)
    }

    /// Runs the simulation and computes metrics over the result.
    pub fn evaluate(&self) -> Result<Evaluation> {
        let schedule = self.run()?;
        let metrics = MetricsReport::calculate(&schedule.processes)?;
        Ok(Evaluation {
            algorithm: self.algorithm.clone(),
            schedule,
            metrics,
        })
    }
}

/// A completed run together with its metrics, ready for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub algorithm: Algorithm,
    pub schedule: Schedule,
    pub metrics: MetricsReport,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Performance Metrics:", self.algorithm.name())?;
        writeln!(f)?;
        write!(f, "{}", self.metrics)
    }
}

/// Validates input and builds the process set for a run.
fn prepare(specs: &[ProcessSpec], algorithm: &Algorithm) -> Result<Vec<Process>> {
    if specs.is_empty() {
        return Err(SchedError::EmptyProcessSet);
    }
    validate_request(specs, algorithm)?;
    debug!(algorithm = %algorithm, processes = specs.len(), "starting simulation");
    Ok(Process::from_specs(specs))
}

fn finish(schedule: Schedule, algorithm: &Algorithm) -> Schedule {
    debug!(
        algorithm = %algorithm,
        makespan = schedule.makespan(),
        slices = schedule.slices.len(),
        "simulation complete"
    );
    schedule
}

/// Marks every not-yet-admitted, unfinished process that has arrived by
/// `time` and returns their indices in input order.
fn admit_arrivals(processes: &[Process], admitted: &mut [bool], time: i64) -> Vec<usize> {
    let mut arrivals = Vec::new();
    for (idx, p) in processes.iter().enumerate() {
        if !admitted[idx] && p.is_ready_at(time) {
            admitted[idx] = true;
            arrivals.push(idx);
        }
    }
    arrivals
}

/// Runs processes back to back in a fixed order, each to completion.
fn run_in_order(processes: Vec<Process>, order: &[usize]) -> Schedule {
    let mut schedule = Schedule::new(processes);
    let mut current_time = 0;

    for &idx in order {
        let p = &mut schedule.processes[idx];
        let start = p.start(current_time);
        let burst = p.remaining_time;
        let end = start + p.execute(burst);
        p.complete(end);
        let id = p.id;

        trace!(process = id, start, end, "dispatch");
        schedule.record(id, start, end);
        current_time = end;
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkloadGenerator;

    fn all_algorithms() -> Vec<Algorithm> {
        vec![
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Priority,
            Algorithm::RoundRobin { quantum: 2 },
            Algorithm::RoundRobin { quantum: 5 },
            Algorithm::Srtf,
            Algorithm::Mlfq(MlfqConfig::default()),
            Algorithm::Mlfq(MlfqConfig::with_quanta(vec![1, 2, 3])),
        ]
    }

    fn scenario() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(0, 5),
            ProcessSpec::new(1, 3),
            ProcessSpec::new(2, 8),
        ]
    }

    #[test]
    fn test_work_is_conserved() {
        for seed in 0..20 {
            let specs = WorkloadGenerator::new(seed).generate(8);
            for algorithm in all_algorithms() {
                let schedule = simulate(&specs, &algorithm).unwrap();
                assert!(schedule.is_complete(), "{algorithm} seed {seed}");
                for p in &schedule.processes {
                    assert_eq!(p.remaining_time, 0);
                    assert_eq!(
                        schedule.executed_time(p.id),
                        p.burst_time,
                        "{algorithm} seed {seed} {p}"
                    );
                }
                let total_burst: i64 = specs.iter().map(|s| s.burst_time).sum();
                let total_run: i64 = schedule.slices.iter().map(|s| s.duration()).sum();
                assert_eq!(total_run, total_burst);
            }
        }
    }

    #[test]
    fn test_timing_invariants() {
        for seed in 100..120 {
            let specs = WorkloadGenerator::new(seed).generate(10);
            for algorithm in all_algorithms() {
                let schedule = simulate(&specs, &algorithm).unwrap();
                for p in &schedule.processes {
                    let start = p.start_time.unwrap();
                    let completion = p.completion_time.unwrap();
                    assert!(start >= p.arrival_time, "{algorithm} {p}");
                    assert!(completion >= p.arrival_time + p.burst_time, "{algorithm} {p}");
                    let first = schedule.slices_for(p.id)[0];
                    assert_eq!(first.start, start, "{algorithm} {p}");
                    assert!(schedule.slices_for(p.id).iter().all(|s| s.end <= completion));
                }
            }
        }
    }

    #[test]
    fn test_no_overlapping_slices() {
        let specs = WorkloadGenerator::new(9).generate(12);
        for algorithm in all_algorithms() {
            let schedule = simulate(&specs, &algorithm).unwrap();
            for pair in schedule.slices.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{algorithm}");
            }
        }
    }

    #[test]
    fn test_non_preemptive_run_whole_bursts() {
        let specs = WorkloadGenerator::new(3).generate(10);
        for algorithm in [Algorithm::Fcfs, Algorithm::Priority, Algorithm::Sjf] {
            assert!(!algorithm.is_preemptive());
            let schedule = simulate(&specs, &algorithm).unwrap();
            for p in &schedule.processes {
                assert_eq!(
                    p.completion_time.unwrap() - p.start_time.unwrap(),
                    p.burst_time
                );
                assert_eq!(schedule.preemption_count(p.id), 0);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let specs = WorkloadGenerator::new(11).generate(15);
        for algorithm in all_algorithms() {
            let a = simulate(&specs, &algorithm).unwrap();
            let b = simulate(&specs, &algorithm).unwrap();
            assert_eq!(a, b, "{algorithm}");
        }
    }

    #[test]
    fn test_output_keeps_input_order() {
        let specs = vec![ProcessSpec::new(5, 1), ProcessSpec::new(0, 2)];
        for algorithm in all_algorithms() {
            let schedule = simulate(&specs, &algorithm).unwrap();
            let ids: Vec<usize> = schedule.processes.iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
    }

    #[test]
    fn test_empty_input() {
        for algorithm in all_algorithms() {
            assert_eq!(
                simulate(&[], &algorithm).unwrap_err(),
                SchedError::EmptyProcessSet
            );
        }
    }

    #[test]
    fn test_zero_burst_rejected() {
        let specs = vec![ProcessSpec::new(0, 3), ProcessSpec::new(1, 0)];
        for algorithm in all_algorithms() {
            let err = simulate(&specs, &algorithm).unwrap_err();
            assert!(matches!(err, SchedError::InvalidInput(_)), "{algorithm}");
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::NonPositiveBurst
            );
        }
    }

    #[test]
    fn test_clock_overflow_rejected_before_simulating() {
        let specs = vec![ProcessSpec::new(i64::MAX - 1, 5)];
        for algorithm in all_algorithms() {
            let err = simulate(&specs, &algorithm).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow,
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_single_unit_process() {
        let specs = vec![ProcessSpec::new(0, 1)];
        for algorithm in all_algorithms() {
            let request = SimulationRequest::new(specs.clone(), algorithm);
            let metrics = request.evaluate().unwrap().metrics;
            assert!((metrics.cpu_utilization - 100.0).abs() < 1e-10);
            assert!((metrics.throughput - 1.0).abs() < 1e-10);
            assert!(metrics.avg_waiting.abs() < 1e-10);
            assert!(metrics.avg_response.abs() < 1e-10);
            // turnaround is the burst itself
            assert!((metrics.avg_turnaround - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!(" sjf ".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!(
            "rr:3".parse::<Algorithm>().unwrap(),
            Algorithm::RoundRobin { quantum: 3 }
        );
        assert_eq!(
            "mlfq".parse::<Algorithm>().unwrap(),
            Algorithm::Mlfq(MlfqConfig::default())
        );
        assert_eq!(
            "mlfq:2,4,8".parse::<Algorithm>().unwrap(),
            Algorithm::Mlfq(MlfqConfig::with_quanta(vec![2, 4, 8]))
        );
        assert!("rr".parse::<Algorithm>().is_err());
        assert!("rr:x".parse::<Algorithm>().is_err());
        assert!("lottery".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_parsed_zero_quantum_fails_at_simulation() {
        let algorithm: Algorithm = "rr:0".parse().unwrap();
        let err = simulate(&scenario(), &algorithm).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveQuantum
        );
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Srtf.to_string(), "Shortest Remaining Time First");
        assert_eq!(
            Algorithm::RoundRobin { quantum: 2 }.to_string(),
            "Round Robin (q=2)"
        );
        assert_eq!(MlfqConfig::default().levels(), 3);
        assert_eq!(MlfqConfig::default().quantum(1), Some(8));
        assert_eq!(MlfqConfig::default().quantum(2), None);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"arrival_time": 0, "burst_time": 5},
                {"arrival_time": 1, "burst_time": 3, "priority": 1}
            ],
            "algorithm": {"kind": "round_robin", "quantum": 2}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::RoundRobin { quantum: 2 });
        assert_eq!(request.processes[1].priority, 1);

        let mlfq: Algorithm =
            serde_json::from_str(r#"{"kind": "mlfq", "level_quanta": [4, 8]}"#).unwrap();
        assert_eq!(mlfq, Algorithm::Mlfq(MlfqConfig::default()));
    }

    #[test]
    fn test_evaluation_display() {
        let request = SimulationRequest::new(scenario(), Algorithm::Fcfs);
        let evaluation = request.evaluate().unwrap();
        let text = evaluation.to_string();
        assert!(text.starts_with("First Come First Serve Performance Metrics:\n\n"));
        assert!(text.contains("Average Waiting Time = 3.33 sec"));
        assert!(text.contains("CPU Utilization = 100.00%"));
    }
}
