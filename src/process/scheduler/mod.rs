/*!
 * MLFQ Scheduler
 * Four feedback levels drained in a fixed order, one burst at a time
 */

use super::context::SimContext;
use super::execution::UnitHandle;
use super::queue::LevelQueue;
use super::types::{ProcessOutcome, ProcessRecord, ProcessSpec};
use crate::core::errors::{SchedulerError, SimError};
use crate::core::types::{Level, ProcessId, TimeUnits, LEVEL_COUNT};
use crate::process::workload::validate_workload;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

mod operations;
mod policy;
mod stats;

pub use stats::SchedulerStats;

/// Multi-level feedback queue scheduler
///
/// Owns the process table, the four level queues and one execution unit
/// per process for the lifetime of a simulation.
pub struct Scheduler {
    ctx: Arc<SimContext>,
    table: Vec<ProcessRecord>,
    units: Vec<UnitHandle>,
    queues: [LevelQueue; LEVEL_COUNT],
    stats: SchedulerStats,
}

impl Scheduler {
    /// Validate the workload and spawn one execution unit per process
    pub fn new(specs: &[ProcessSpec], ctx: Arc<SimContext>) -> Result<Self, SimError> {
        ctx.config.validate()?;
        validate_workload(specs, ctx.config.max_processes)?;

        let capacity = ctx.config.max_processes;
        let queues = Level::ALL.map(|level| LevelQueue::new(level, capacity));

        let mut units = Vec::with_capacity(specs.len());
        for spec in specs {
            match UnitHandle::spawn(*spec, Arc::clone(&ctx)) {
                Ok(unit) => units.push(unit),
                Err(e) => {
                    for unit in units {
                        let _ = unit.join();
                    }
                    return Err(e.into());
                }
            }
        }

        info!(
            processes = specs.len(),
            quantum = ctx.config.quantum,
            "Scheduler initialized"
        );

        Ok(Self {
            ctx,
            table: specs.iter().copied().map(ProcessRecord::new).collect(),
            units,
            queues,
            stats: SchedulerStats::default(),
        })
    }

    /// Process table snapshot
    pub fn records(&self) -> &[ProcessRecord] {
        &self.table
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    #[inline]
    fn queue(&self, level: Level) -> &LevelQueue {
        &self.queues[level.index()]
    }

    /// Join every execution unit, reporting the first failure
    fn shutdown(&mut self) -> Result<(), SchedulerError> {
        let mut first_err = None;
        for unit in self.units.drain(..) {
            if let Err(e) = unit.join() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Final state of a finished simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Process table in input order
    pub records: Vec<ProcessRecord>,
    /// Clock value after the last burst
    pub clock: TimeUnits,
    pub stats: SchedulerStats,
}

impl SimulationReport {
    /// `(id, total_time, completion/turnaround)` per process, in input order
    pub fn outcomes(&self) -> Vec<ProcessOutcome> {
        self.records.iter().filter_map(ProcessRecord::outcome).collect()
    }

    /// Arithmetic mean of turnaround times
    pub fn mean_turnaround(&self) -> f64 {
        let outcomes = self.outcomes();
        if outcomes.is_empty() {
            return 0.0;
        }
        let total: TimeUnits = outcomes.iter().map(|o| o.turnaround_time).sum();
        total as f64 / outcomes.len() as f64
    }

    /// Process ids ordered by completion time
    pub fn completion_order(&self) -> Vec<ProcessId> {
        let mut outcomes = self.outcomes();
        outcomes.sort_by_key(|o| o.completion_time);
        outcomes.into_iter().map(|o| o.id).collect()
    }
}
