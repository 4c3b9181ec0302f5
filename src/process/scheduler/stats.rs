/*!
 * Scheduler Statistics
 * Track and report dispatch counters
 */

use crate::core::types::{Level, LEVEL_COUNT};
use serde::{Deserialize, Serialize};

/// Scheduler counters
///
/// Only the scheduler thread updates these, so plain integers suffice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Completed scheduling rounds (all four levels drained once)
    pub rounds: u64,
    /// Bursts dispatched
    pub dispatches: u64,
    /// Moves from Q0..Q2 to the next level
    pub demotions: u64,
    /// Moves from Q3 back to Q0
    pub cycles: u64,
    /// Processes that reached completion
    pub completions: u64,
    /// Bursts dispatched per level
    pub per_level: [u64; LEVEL_COUNT],
}

impl SchedulerStats {
    pub(super) fn record_dispatch(&mut self, level: Level) {
        self.dispatches += 1;
        self.per_level[level.index()] += 1;
    }

    pub(super) fn record_move(&mut self, from: Level) {
        if from == Level::Q3 {
            self.cycles += 1;
        } else {
            self.demotions += 1;
        }
    }

    pub fn dispatches_at(&self, level: Level) -> u64 {
        self.per_level[level.index()]
    }
}
