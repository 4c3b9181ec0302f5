/*!
 * Level Queue
 * Bounded, lock-protected FIFO of process slots
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Level, Slot};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// FIFO queue for one feedback level
///
/// Every operation takes the queue's own lock; there is no ordering
/// guarantee across different queues.
pub struct LevelQueue {
    level: Level,
    capacity: usize,
    items: Mutex<VecDeque<Slot>>,
}

impl LevelQueue {
    pub fn new(level: Level, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            items: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append a slot; fails instead of dropping when the queue is full
    pub fn enqueue(&self, slot: Slot) -> Result<(), SchedulerError> {
        let mut items = self.items.lock();
        if items.len() >= self.capacity {
            return Err(SchedulerError::QueueFull {
                level: self.level,
                capacity: self.capacity,
            });
        }
        items.push_back(slot);
        Ok(())
    }

    /// Remove the oldest slot
    pub fn dequeue(&self) -> Option<Slot> {
        self.items.lock().pop_front()
    }

    /// Remove every slot, oldest first
    pub fn drain(&self) -> Vec<Slot> {
        self.items.lock().drain(..).collect()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.items.lock().contains(&slot)
    }

    /// Point-in-time snapshot
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }
}
