/*!
 * Process Types
 * Process specs, records and final outcomes
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Level, ProcessId, TimeUnits};
use serde::{Deserialize, Serialize};

/// Input description of one simulated job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: ProcessId,
    pub total_time: TimeUnits,
}

impl ProcessSpec {
    pub const fn new(id: ProcessId, total_time: TimeUnits) -> Self {
        Self { id, total_time }
    }
}

impl From<(ProcessId, TimeUnits)> for ProcessSpec {
    fn from((id, total_time): (ProcessId, TimeUnits)) -> Self {
        Self::new(id, total_time)
    }
}

/// Outcome of one burst, reported by an execution unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurstReport {
    /// Units executed in this burst
    pub slice: TimeUnits,
    /// Remaining time after the burst
    pub remaining_time: TimeUnits,
    /// Clock value at completion, if this burst finished the process
    pub completion_time: Option<TimeUnits>,
}

/// Scheduler-side state of one process
///
/// # Ownership
/// `current_queue` and `is_running` (set) are written by the scheduler.
/// `remaining_time`, the completion fields and `is_running` (clear) only
/// change by applying a [`BurstReport`] from the process's own unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub total_time: TimeUnits,
    pub remaining_time: TimeUnits,
    pub arrival_time: TimeUnits,
    pub completion_time: Option<TimeUnits>,
    pub turnaround_time: Option<TimeUnits>,
    /// `None` until first admitted
    pub current_queue: Option<Level>,
    pub is_running: bool,
    pub is_completed: bool,
}

impl ProcessRecord {
    pub fn new(spec: ProcessSpec) -> Self {
        Self {
            id: spec.id,
            total_time: spec.total_time,
            remaining_time: spec.total_time,
            arrival_time: 0,
            completion_time: None,
            turnaround_time: None,
            current_queue: None,
            is_running: false,
            is_completed: false,
        }
    }

    /// Mirror a burst report into the record
    pub fn apply(&mut self, report: &BurstReport) -> Result<(), SchedulerError> {
        if self.is_completed {
            return Err(SchedulerError::CompletedTwice(self.id));
        }
        if report.remaining_time >= self.remaining_time {
            return Err(SchedulerError::NoProgress {
                id: self.id,
                before: self.remaining_time,
                after: report.remaining_time,
            });
        }
        // Completion is reported exactly when remaining time reaches zero
        if (report.remaining_time == 0) != report.completion_time.is_some() {
            return Err(SchedulerError::InconsistentReport {
                id: self.id,
                remaining: report.remaining_time,
                completion_time: report.completion_time,
            });
        }

        self.remaining_time = report.remaining_time;
        self.is_running = false;

        if let Some(at) = report.completion_time {
            self.is_completed = true;
            self.completion_time = Some(at);
            self.turnaround_time = Some(at - self.arrival_time);
        }

        Ok(())
    }

    pub fn outcome(&self) -> Option<ProcessOutcome> {
        Some(ProcessOutcome {
            id: self.id,
            total_time: self.total_time,
            completion_time: self.completion_time?,
            turnaround_time: self.turnaround_time?,
        })
    }
}

/// Final result for one process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub id: ProcessId,
    pub total_time: TimeUnits,
    pub completion_time: TimeUnits,
    pub turnaround_time: TimeUnits,
}
