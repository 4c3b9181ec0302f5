/*!
 * Simulation Context
 * State shared by the scheduler and every execution unit
 */

use super::clock::SimClock;
use crate::core::config::SimConfig;
use crate::monitoring::EventSink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared simulation context, passed explicitly by `Arc`
pub struct SimContext {
    pub config: SimConfig,
    pub clock: SimClock,
    pub sink: Arc<dyn EventSink>,
    all_completed: AtomicBool,
}

impl SimContext {
    pub fn new(config: SimConfig, sink: Arc<dyn EventSink>) -> Self {
        Self {
            config,
            clock: SimClock::new(),
            sink,
            all_completed: AtomicBool::new(false),
        }
    }

    /// Result of the last end-of-round completion scan
    #[inline]
    pub fn all_completed(&self) -> bool {
        self.all_completed.load(Ordering::Acquire)
    }

    #[inline]
    pub(crate) fn set_all_completed(&self, done: bool) {
        self.all_completed.store(done, Ordering::Release);
    }
}

impl std::fmt::Debug for SimContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimContext")
            .field("config", &self.config)
            .field("clock", &self.clock.now())
            .field("all_completed", &self.all_completed())
            .finish_non_exhaustive()
    }
}
