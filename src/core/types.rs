/*!
 * Core Types
 * Common types used across the simulator
 */

use super::errors::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identity (a single character, unique within a workload)
pub type ProcessId = char;

/// Simulated CPU time, in abstract time units
pub type TimeUnits = u64;

/// Index of a process in the scheduler's process table
pub type Slot = usize;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, SimError>;

/// Number of feedback levels
pub const LEVEL_COUNT: usize = 4;

/// Feedback queue level
///
/// Processes enter at `Q0` and move one level down after every incomplete
/// burst; `Q3` wraps back around to `Q0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    Q0 = 0,
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
}

impl Level {
    /// All levels in the order a scheduling round visits them
    pub const ALL: [Level; LEVEL_COUNT] = [Level::Q0, Level::Q1, Level::Q2, Level::Q3];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Level a process moves to after an incomplete burst at this level
    #[inline]
    pub const fn next(self) -> Level {
        match self {
            Level::Q0 => Level::Q1,
            Level::Q1 => Level::Q2,
            Level::Q2 => Level::Q3,
            Level::Q3 => Level::Q0,
        }
    }

    /// Ordering policy applied when this level is drained
    #[inline]
    pub const fn policy(self) -> LevelPolicy {
        match self {
            Level::Q0 => LevelPolicy::RoundRobin,
            Level::Q1 => LevelPolicy::Fcfs,
            Level::Q2 => LevelPolicy::LongestRemainingFirst,
            Level::Q3 => LevelPolicy::ShortestRemainingFirst,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.index())
    }
}

/// Per-level ordering policy
///
/// Every level runs the same bounded burst; levels differ only in the order
/// they dispatch the processes drained from their queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelPolicy {
    /// Dequeue order
    RoundRobin,
    /// Arrival order at the level
    Fcfs,
    /// Largest remaining time first ("priority" level)
    LongestRemainingFirst,
    /// Smallest remaining time first (SJF level)
    ShortestRemainingFirst,
}

impl LevelPolicy {
    /// Short label used in trace output
    pub const fn label(self) -> &'static str {
        match self {
            LevelPolicy::RoundRobin => "RR",
            LevelPolicy::Fcfs => "FCFS",
            LevelPolicy::LongestRemainingFirst => "Priority",
            LevelPolicy::ShortestRemainingFirst => "SJF",
        }
    }

    /// Whether the policy reorders the drained batch by remaining time
    pub const fn is_sorted(self) -> bool {
        matches!(
            self,
            LevelPolicy::LongestRemainingFirst | LevelPolicy::ShortestRemainingFirst
        )
    }
}
