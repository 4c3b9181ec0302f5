/*!
 * Process Module
 * Process records, level queues, execution units and the MLFQ scheduler
 */

pub mod clock;
pub mod context;
pub mod execution;
pub mod queue;
pub mod scheduler;
pub mod types;
pub mod workload;

// Re-export for convenience
pub use clock::SimClock;
pub use context::SimContext;
pub use queue::LevelQueue;
pub use scheduler::{Scheduler, SchedulerStats, SimulationReport};
pub use types::{BurstReport, ProcessOutcome, ProcessRecord, ProcessSpec};
pub use workload::{default_workload, resolve_workload, validate_workload, MenuChoice};
