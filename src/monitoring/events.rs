/*!
 * Simulation Events
 * Strongly-typed trace events and the sinks that receive them
 */

use crate::core::types::{Level, ProcessId, TimeUnits};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// One observable step of the simulation
///
/// Emitted by the scheduler (dispatch, moves, rounds) and by execution
/// units (burst start, completion). Bursts never overlap, so the stream a
/// sink observes is totally ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    /// Process placed on its first queue
    Admitted { id: ProcessId, level: Level },
    /// Scheduler handed a burst to the process's execution unit
    Dispatched {
        id: ProcessId,
        level: Level,
        remaining: TimeUnits,
    },
    /// Execution unit started a burst
    BurstStarted {
        id: ProcessId,
        level: Level,
        slice: TimeUnits,
    },
    /// Process finished its last burst
    Completed { id: ProcessId, at: TimeUnits },
    /// Incomplete process moved to another level
    Moved {
        id: ProcessId,
        from: Level,
        to: Level,
        remaining: TimeUnits,
    },
    /// All four levels drained once
    RoundFinished {
        round: u64,
        clock: TimeUnits,
        all_completed: bool,
    },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Admitted { id, level } => write!(f, "Process {} admitted to {}", id, level),
            SimEvent::Dispatched {
                id,
                level,
                remaining,
            } => {
                let policy = level.policy();
                if policy.is_sorted() {
                    write!(
                        f,
                        "Scheduling {} in {} ({}: {})",
                        id,
                        level,
                        policy.label(),
                        remaining
                    )
                } else {
                    write!(f, "Scheduling {} in {} ({})", id, level, policy.label())
                }
            }
            SimEvent::BurstStarted { id, level, slice } => {
                write!(f, "Process {} running for {} units in {}", id, slice, level)
            }
            SimEvent::Completed { id, at } => {
                write!(f, "Process {} completed at time {}", id, at)
            }
            SimEvent::Moved {
                id,
                from,
                to,
                remaining,
            } => {
                if *from == Level::Q3 {
                    write!(
                        f,
                        "Process {} cycled back to {} with {} remaining",
                        id, to, remaining
                    )
                } else {
                    write!(f, "Process {} moved to {} with {} remaining", id, to, remaining)
                }
            }
            SimEvent::RoundFinished {
                round,
                clock,
                all_completed,
            } => write!(
                f,
                "Round {} finished at time {} (all completed: {})",
                round, clock, all_completed
            ),
        }
    }
}

/// Receiver of simulation events
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &SimEvent);
}

/// Sink that logs every event through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &SimEvent) {
        info!(target: "mlfq::trace", "{}", event);
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SimEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events received so far
    pub fn events(&self) -> Vec<SimEvent> {
        self.events.lock().clone()
    }

    /// `(id, level, slice)` for every burst, in execution order
    pub fn bursts(&self) -> Vec<(ProcessId, Level, TimeUnits)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SimEvent::BurstStarted { id, level, slice } => Some((*id, *level, *slice)),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &SimEvent) {
        self.events.lock().push(event.clone());
    }
}
