//! Simulation domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Caller-supplied descriptor (arrival, burst, priority) |
//! | `Process` | Mutable simulation record owned by one run |
//! | `Schedule` | Completed process set plus execution trace |
//! | `Slice` | One contiguous CPU interval |

mod process;
mod schedule;
mod workload;

pub use process::{Process, ProcessSpec};
pub use schedule::{Schedule, Slice};
pub use workload::{parse_workload, GeneratorConfig, WorkloadGenerator};
