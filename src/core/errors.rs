/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Level, ProcessId, TimeUnits};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workload validation errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("Workload is empty")]
    #[diagnostic(
        code(workload::empty),
        help("Provide at least one process or use the default workload.")
    )]
    Empty,

    #[error("Too many processes: {count} requested, limit {limit}")]
    #[diagnostic(
        code(workload::too_many),
        help("Reduce the number of processes to the configured maximum.")
    )]
    TooMany { count: usize, limit: usize },

    #[error("Duplicate process id '{0}'")]
    #[diagnostic(
        code(workload::duplicate_id),
        help("Every process needs a distinct single-character id.")
    )]
    DuplicateId(ProcessId),

    #[error("Process '{0}' needs a positive total time")]
    #[diagnostic(
        code(workload::zero_time),
        help("Total CPU time must be at least one time unit.")
    )]
    ZeroTime(ProcessId),

    #[error("Combined total time overflows the simulation clock")]
    #[diagnostic(
        code(workload::total_overflow),
        help("Reduce the total CPU times so their sum fits in 64 bits.")
    )]
    TotalOverflow,
}

/// Scheduler and rendezvous errors
///
/// All of these abort the simulation: there is no partial-failure mode.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Level queue {level} full (capacity {capacity})")]
    #[diagnostic(
        code(scheduler::queue_full),
        help("Queue capacity must cover the whole workload.")
    )]
    QueueFull { level: Level, capacity: usize },

    #[error("Process '{0}' is already queued or running")]
    #[diagnostic(code(scheduler::already_queued))]
    AlreadyQueued(ProcessId),

    #[error("Process '{0}' dispatched after completion")]
    #[diagnostic(code(scheduler::dispatch_completed))]
    DispatchCompleted(ProcessId),

    #[error("Process '{id}' made no progress: remaining {before} -> {after}")]
    #[diagnostic(code(scheduler::no_progress))]
    NoProgress {
        id: ProcessId,
        before: TimeUnits,
        after: TimeUnits,
    },

    #[error("Process '{0}' reported completion twice")]
    #[diagnostic(code(scheduler::completed_twice))]
    CompletedTwice(ProcessId),

    #[error(
        "Process '{id}' reported remaining {remaining} with completion {completion_time:?}"
    )]
    #[diagnostic(code(scheduler::inconsistent_report))]
    InconsistentReport {
        id: ProcessId,
        remaining: TimeUnits,
        completion_time: Option<TimeUnits>,
    },

    #[error("Execution unit for process '{0}' disconnected")]
    #[diagnostic(
        code(scheduler::unit_disconnected),
        help("The execution unit thread exited before its process completed.")
    )]
    UnitDisconnected(ProcessId),

    #[error("Failed to spawn thread: {0}")]
    #[diagnostic(code(scheduler::spawn_failed))]
    SpawnFailed(String),

    #[error("Thread panicked: {0}")]
    #[diagnostic(code(scheduler::panicked))]
    Panicked(String),
}

/// Configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Check the environment variable; it must be a positive integer.")
    )]
    InvalidValue { key: String, value: String },

    #[error("Quantum must be positive")]
    #[diagnostic(code(config::zero_quantum))]
    ZeroQuantum,

    #[error("Maximum process count must be positive")]
    #[diagnostic(code(config::zero_capacity))]
    ZeroCapacity,

    #[error("Maximum process count {requested} exceeds the limit of {limit}")]
    #[diagnostic(
        code(config::capacity_too_large),
        help("The operator menu only accepts counts up to this limit.")
    )]
    CapacityTooLarge { requested: usize, limit: usize },
}

/// Top-level simulator error
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Workload(#[from] WorkloadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}
