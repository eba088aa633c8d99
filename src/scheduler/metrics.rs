//! Performance metrics for a completed process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | CPU Utilization | Σburst / (max completion - min arrival) × 100 |
//! | Throughput | n / (max completion - min arrival) |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SchedError};
use crate::models::Process;

/// Per-process timing figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub id: usize,
    pub turnaround: i64,
    pub waiting: i64,
    pub response: i64,
}

impl ProcessMetrics {
    /// Computes the figures of one completed process.
    pub fn of(process: &Process) -> Result<Self> {
        match (process.turnaround_time(), process.waiting_time(), process.response_time()) {
            (Some(turnaround), Some(waiting), Some(response)) => Ok(Self {
                id: process.id,
                turnaround,
                waiting,
                response,
            }),
            _ => Err(SchedError::IncompleteProcess { id: process.id }),
        }
    }
}

/// Aggregate performance of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Busy share of the observation span (0..100).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl MetricsReport {
    /// Computes the report from a completed process set.
    ///
    /// # Errors
    /// - `EmptyProcessSet` for no processes.
    /// - `IncompleteProcess` if any process lacks a start or completion.
    /// - `DegenerateMetrics` if `max(completion) - min(arrival) <= 0`.
    pub fn calculate(processes: &[Process]) -> Result<Self> {
        if processes.is_empty() {
            return Err(SchedError::EmptyProcessSet);
        }

        let per_process = processes
            .iter()
            .map(ProcessMetrics::of)
            .collect::<Result<Vec<_>>>()?;

        let max_completion = processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0);
        let min_arrival = processes.iter().map(|p| p.arrival_time).min().unwrap_or(0);
        let span = max_completion - min_arrival;
        if span <= 0 {
            return Err(SchedError::DegenerateMetrics { span });
        }

        let n = processes.len() as f64;
        // Widened: a clock that fits in i64 does not bound n of them summed.
        let total_waiting: i128 = per_process.iter().map(|m| i128::from(m.waiting)).sum();
        let total_turnaround: i128 = per_process.iter().map(|m| i128::from(m.turnaround)).sum();
        let total_response: i128 = per_process.iter().map(|m| i128::from(m.response)).sum();
        let total_burst: i128 = processes.iter().map(|p| i128::from(p.burst_time)).sum();

        Ok(Self {
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            avg_response: total_response as f64 / n,
            cpu_utilization: total_burst as f64 / span as f64 * 100.0,
            throughput: n / span as f64,
        })
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Waiting Time = {:.2} sec", self.avg_waiting)?;
        writeln!(f, "Average Turnaround Time = {:.2} sec", self.avg_turnaround)?;
        writeln!(f, "Average Response Time = {:.2} sec", self.avg_response)?;
        writeln!(f, "CPU Utilization = {:.2}%", self.cpu_utilization)?;
        write!(f, "Throughput = {:.2} processes/sec", self.throughput)
    }
}
