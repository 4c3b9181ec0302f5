/*!
 * Simulation Limits and Constants
 *
 * Centralized location for the simulator's fixed parameters.
 */

use super::types::{ProcessId, TimeUnits};
use std::time::Duration;

// =============================================================================
// WORKLOAD LIMITS
// =============================================================================

/// Maximum number of processes in one simulation
/// Also the capacity of every level queue
pub const MAX_PROCESSES: usize = 10;

/// Default workload used when the requested process count is out of range
pub const DEFAULT_WORKLOAD: [(ProcessId, TimeUnits); 5] = [
    ('A', 300),
    ('B', 150),
    ('C', 250),
    ('D', 350),
    ('E', 450),
];

// =============================================================================
// SCHEDULING PARAMETERS
// =============================================================================

/// Maximum burst length, shared by every level
pub const DEFAULT_QUANTUM: TimeUnits = 5;

/// Wall-clock time spent per simulated time unit
pub const DEFAULT_UNIT_DELAY: Duration = Duration::from_millis(1);

// =============================================================================
// THREAD NAMES
// =============================================================================

/// Name of the scheduler thread
pub const SCHEDULER_THREAD_NAME: &str = "mlfq-scheduler";

/// Prefix for execution unit thread names (followed by the process id)
pub const UNIT_THREAD_PREFIX: &str = "proc-";
