/*!
 * Process Execution Unit
 * One thread per process, driven by a blocking command/report handoff
 */

use super::context::SimContext;
use super::types::{BurstReport, ProcessSpec};
use crate::core::errors::SchedulerError;
use crate::core::limits::UNIT_THREAD_PREFIX;
use crate::core::types::{Level, ProcessId, TimeUnits};
use crate::monitoring::SimEvent;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

/// Command sent from the scheduler to an execution unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCommand {
    /// Execute one bounded burst at the given level
    Run { level: Level },
}

/// Scheduler-side handle to a running execution unit
pub struct UnitHandle {
    id: ProcessId,
    commands: flume::Sender<UnitCommand>,
    reports: flume::Receiver<BurstReport>,
    thread: Option<JoinHandle<()>>,
}

impl UnitHandle {
    /// Spawn the execution unit thread for `spec`
    pub fn spawn(spec: ProcessSpec, ctx: Arc<SimContext>) -> Result<Self, SchedulerError> {
        let (command_tx, command_rx) = flume::bounded(1);
        let (report_tx, report_rx) = flume::bounded(1);

        let unit = ExecutionUnit {
            id: spec.id,
            remaining: spec.total_time,
            ctx,
            commands: command_rx,
            reports: report_tx,
        };

        let thread = thread::Builder::new()
            .name(format!("{}{}", UNIT_THREAD_PREFIX, spec.id))
            .spawn(move || unit.run())
            .map_err(|e| SchedulerError::SpawnFailed(e.to_string()))?;

        Ok(Self {
            id: spec.id,
            commands: command_tx,
            reports: report_rx,
            thread: Some(thread),
        })
    }

    /// Hand one burst to the unit and block until it reports back
    pub fn run_burst(&self, level: Level) -> Result<BurstReport, SchedulerError> {
        self.commands
            .send(UnitCommand::Run { level })
            .map_err(|_| SchedulerError::UnitDisconnected(self.id))?;
        self.reports
            .recv()
            .map_err(|_| SchedulerError::UnitDisconnected(self.id))
    }

    /// Close the command channel and wait for the thread to exit
    pub fn join(mut self) -> Result<(), SchedulerError> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        // Dropping the sender wakes a unit still parked on recv
        drop(self.commands);
        thread.join().map_err(|_| {
            error!(id = %self.id, "Execution unit panicked");
            SchedulerError::Panicked(format!("execution unit {}", self.id))
        })
    }
}

/// Unit-side state; owns the process's remaining time
struct ExecutionUnit {
    id: ProcessId,
    remaining: TimeUnits,
    ctx: Arc<SimContext>,
    commands: flume::Receiver<UnitCommand>,
    reports: flume::Sender<BurstReport>,
}

impl ExecutionUnit {
    fn run(mut self) {
        debug!(id = %self.id, remaining = self.remaining, "Execution unit idle");

        while let Ok(UnitCommand::Run { level }) = self.commands.recv() {
            let report = self.burst(level);
            let finished = report.completion_time.is_some();

            if self.reports.send(report).is_err() || finished {
                break;
            }
        }

        debug!(id = %self.id, remaining = self.remaining, "Execution unit exiting");
    }

    fn burst(&mut self, level: Level) -> BurstReport {
        let slice = self.remaining.min(self.ctx.config.quantum);
        self.ctx.sink.emit(&SimEvent::BurstStarted {
            id: self.id,
            level,
            slice,
        });

        let busy = self.ctx.config.burst_duration(slice);
        if !busy.is_zero() {
            thread::sleep(busy);
        }

        let remaining = &mut self.remaining;
        let report = self.ctx.clock.advance(slice, |now| {
            *remaining -= slice;
            BurstReport {
                slice,
                remaining_time: *remaining,
                completion_time: (*remaining == 0).then_some(now),
            }
        });

        if let Some(at) = report.completion_time {
            self.ctx.sink.emit(&SimEvent::Completed { id: self.id, at });
        }
        report
    }
}
