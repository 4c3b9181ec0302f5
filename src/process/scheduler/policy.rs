/*!
 * Level Policies
 * Order a drained batch according to a level's policy
 */

use crate::core::types::{LevelPolicy, TimeUnits};

impl LevelPolicy {
    /// Reorder `batch` in place for dispatch
    ///
    /// FIFO policies keep dequeue order. Sorted policies use a stable sort
    /// on remaining time, so equal keys keep their dequeue order.
    pub fn order<T>(self, batch: &mut [T], remaining: impl Fn(&T) -> TimeUnits) {
        match self {
            LevelPolicy::RoundRobin | LevelPolicy::Fcfs => {}
            LevelPolicy::LongestRemainingFirst => {
                batch.sort_by(|a, b| remaining(b).cmp(&remaining(a)));
            }
            LevelPolicy::ShortestRemainingFirst => {
                batch.sort_by_key(|item| remaining(item));
            }
        }
    }
}
