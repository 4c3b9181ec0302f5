/*!
 * Simulation
 * Builder and handle for one complete scheduler run
 */

use crate::core::config::SimConfig;
use crate::core::errors::{SchedulerError, SimError};
use crate::core::limits::SCHEDULER_THREAD_NAME;
use crate::core::types::SimResult;
use crate::monitoring::{EventSink, TracingSink};
use crate::process::context::SimContext;
use crate::process::scheduler::{Scheduler, SimulationReport};
use crate::process::types::ProcessSpec;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{error, info};

/// Builder for a simulation run
pub struct Simulation {
    specs: Vec<ProcessSpec>,
    config: SimConfig,
    sink: Arc<dyn EventSink>,
}

impl Simulation {
    /// Simulation of `specs` with default configuration and tracing output
    pub fn new(specs: Vec<ProcessSpec>) -> Self {
        Self {
            specs,
            config: SimConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Route trace events to `sink` instead of the log
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Spawn the execution units and the scheduler thread
    pub fn spawn(self) -> SimResult<SimulationHandle> {
        let ctx = Arc::new(SimContext::new(self.config, self.sink));
        let scheduler = Scheduler::new(&self.specs, Arc::clone(&ctx))?;

        info!(processes = self.specs.len(), "Starting MLFQ simulation");

        let thread = thread::Builder::new()
            .name(SCHEDULER_THREAD_NAME.to_string())
            .spawn(move || scheduler.run())
            .map_err(|e| SchedulerError::SpawnFailed(e.to_string()))?;

        Ok(SimulationHandle { ctx, thread })
    }

    /// Spawn and wait for completion
    pub fn run(self) -> SimResult<SimulationReport> {
        self.spawn()?.join()
    }
}

/// Handle to a running simulation
pub struct SimulationHandle {
    ctx: Arc<SimContext>,
    thread: JoinHandle<SimResult<SimulationReport>>,
}

impl SimulationHandle {
    /// Shared context (clock, completion flag)
    pub fn context(&self) -> &Arc<SimContext> {
        &self.ctx
    }

    /// Wait for the scheduler thread and return its report
    pub fn join(self) -> SimResult<SimulationReport> {
        match self.thread.join() {
            Ok(result) => result,
            Err(_) => {
                error!("Scheduler thread panicked");
                Err(SimError::from(SchedulerError::Panicked(
                    SCHEDULER_THREAD_NAME.to_string(),
                )))
            }
        }
    }
}

/// Run `specs` to completion with `config`, logging trace events
pub fn run_simulation(specs: Vec<ProcessSpec>, config: SimConfig) -> SimResult<SimulationReport> {
    Simulation::new(specs).with_config(config).run()
}
