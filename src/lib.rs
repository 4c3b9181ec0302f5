/*!
 * MLFQ Scheduler Simulator
 * Multi-level feedback queue simulation exposed as a library
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod simulation;

// Re-exports
pub use crate::core::{
    ConfigError, Level, LevelPolicy, ProcessId, SchedulerError, SimConfig, SimError, SimResult,
    TimeUnits, WorkloadError,
};
pub use monitoring::{init_tracing, EventSink, RecordingSink, SimEvent, TracingSink};
pub use process::{
    default_workload, resolve_workload, MenuChoice, ProcessOutcome, ProcessRecord, ProcessSpec,
    SchedulerStats, SimulationReport,
};
pub use simulation::{run_simulation, Simulation, SimulationHandle};
