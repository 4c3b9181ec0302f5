/*!
 * Simulation Clock
 * Shared counter advanced by completed bursts
 */

use crate::core::types::TimeUnits;
use parking_lot::Mutex;

/// Simulated time, only ever incremented
///
/// The lock doubles as the critical section in which an execution unit
/// finalizes its burst, so a completion time always equals the clock value
/// observed at the moment of completion.
#[derive(Debug, Default)]
pub struct SimClock {
    now: Mutex<TimeUnits>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> TimeUnits {
        *self.now.lock()
    }

    /// Advance by `slice` and run `finalize` with the new time, under the lock
    ///
    /// Saturates at `TimeUnits::MAX`; validated workloads never reach it.
    pub fn advance<R>(&self, slice: TimeUnits, finalize: impl FnOnce(TimeUnits) -> R) -> R {
        let mut now = self.now.lock();
        *now = now.saturating_add(slice);
        finalize(*now)
    }
}
