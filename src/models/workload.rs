//! Workload sources: plain-text process lists and seeded random batches.
//!
//! # Text Format
//!
//! One process per line, whitespace-separated:
//!
//! ```text
//! # arrival burst [priority]
//! 0 5
//! 1 3 2
//! ```
//!
//! Blank lines and `#` comments are skipped.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::ProcessSpec;
use crate::error::{Result, SchedError};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses a text workload into descriptors.
///
/// Reports every malformed line at once. Semantic checks (negative arrival,
/// zero burst) are left to the engine's validation.
pub fn parse_workload(text: &str) -> Result<Vec<ProcessSpec>> {
    let mut specs = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if !(2..=3).contains(&fields.len()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::Malformed,
                format!(
                    "line {line_no}: expected `arrival burst [priority]`, found {} field(s)",
                    fields.len()
                ),
            ));
            continue;
        }

        let arrival = parse_field::<i64>(fields[0], "arrival", line_no, &mut errors);
        let burst = parse_field::<i64>(fields[1], "burst", line_no, &mut errors);
        let priority = match fields.get(2) {
            Some(f) => parse_field::<i32>(f, "priority", line_no, &mut errors),
            None => Some(0),
        };

        if let (Some(arrival), Some(burst), Some(priority)) = (arrival, burst, priority) {
            specs.push(ProcessSpec::new(arrival, burst).with_priority(priority));
        }
    }

    if errors.is_empty() {
        Ok(specs)
    } else {
        Err(SchedError::InvalidInput(errors))
    }
}

fn parse_field<T: std::str::FromStr>(
    field: &str,
    name: &str,
    line_no: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    match field.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::Malformed,
                format!("line {line_no}: {name} `{field}` is not an integer"),
            ));
            None
        }
    }
}

/// Value ranges for generated workloads (all bounds inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub arrival: (i64, i64),
    pub burst: (i64, i64),
    pub priority: (i32, i32),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            arrival: (0, 20),
            burst: (1, 12),
            priority: (0, 5),
        }
    }
}

/// Seeded generator of well-formed workloads.
///
/// Equal seeds produce equal workloads. Bounds are normalized so the output
/// always passes validation: arrivals are non-negative and bursts positive.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GeneratorConfig::default())
    }

    /// Creates a generator with explicit ranges.
    pub fn with_config(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws `count` descriptors.
    pub fn generate(&mut self, count: usize) -> Vec<ProcessSpec> {
        let arrival = normalize(self.config.arrival, 0);
        let burst = normalize(self.config.burst, 1);
        let (plo, phi) = self.config.priority;
        let priority = (plo.min(phi), plo.max(phi));

        (0..count)
            .map(|_| {
                ProcessSpec::new(
                    self.rng.random_range(arrival.0..=arrival.1),
                    self.rng.random_range(burst.0..=burst.1),
                )
                .with_priority(self.rng.random_range(priority.0..=priority.1))
            })
            .collect()
    }
}

fn normalize((lo, hi): (i64, i64), floor: i64) -> (i64, i64) {
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    let lo = lo.max(floor);
    (lo, hi.max(lo))
}
