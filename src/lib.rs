//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling disciplines over a fixed,
//! fully-known batch of processes and reports the standard performance
//! metrics. A teaching and analysis tool, not a live scheduler.
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec`, `Process`, `Schedule`, `Slice`, workload
//!   parsing and seeded generation
//! - **`validation`**: precondition checks (arrival, burst, quanta)
//! - **`dispatching`**: selection rules with explicit tie-breaking
//! - **`scheduler`**: FCFS, SJF, Priority, Round Robin, SRTF, MLFQ and
//!   `MetricsReport`
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::ProcessSpec;
//! use cpu_sched::scheduler::{simulate, Algorithm, MetricsReport};
//!
//! let specs = vec![
//!     ProcessSpec::new(0, 5),
//!     ProcessSpec::new(1, 3),
//!     ProcessSpec::new(2, 8),
//! ];
//! let schedule = simulate(&specs, &Algorithm::Fcfs).unwrap();
//! let report = MetricsReport::calculate(&schedule.processes).unwrap();
//! assert!((report.throughput - 0.1875).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau, "Operating Systems: Three Easy Pieces", Ch. 7-8

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, SchedError};
