/*!
 * Scheduler Core Operations
 * Admit, drain levels, dispatch bursts and requeue processes
 */

use super::{Scheduler, SimulationReport};
use crate::core::errors::{SchedulerError, SimError};
use crate::core::types::{Level, Slot};
use crate::monitoring::SimEvent;
use tracing::{debug, info};

impl Scheduler {
    /// Drive every process to completion and return the final report
    ///
    /// Rounds always drain all four levels; completion is only checked
    /// after a full round.
    pub fn run(mut self) -> Result<SimulationReport, SimError> {
        self.admit_all()?;

        loop {
            self.run_round()?;

            let done = self.table.iter().all(|record| record.is_completed);
            self.ctx.set_all_completed(done);
            self.stats.rounds += 1;
            self.ctx.sink.emit(&SimEvent::RoundFinished {
                round: self.stats.rounds,
                clock: self.ctx.clock.now(),
                all_completed: done,
            });

            if done {
                break;
            }
        }

        self.shutdown()?;

        let clock = self.ctx.clock.now();
        info!(
            clock,
            rounds = self.stats.rounds,
            dispatches = self.stats.dispatches,
            demotions = self.stats.demotions,
            cycles = self.stats.cycles,
            "All processes completed"
        );

        Ok(SimulationReport {
            records: std::mem::take(&mut self.table),
            clock,
            stats: std::mem::take(&mut self.stats),
        })
    }

    /// Place every process on `Q0` in input order
    pub(super) fn admit_all(&mut self) -> Result<(), SchedulerError> {
        for slot in 0..self.table.len() {
            self.enqueue(slot, Level::Q0)?;
            self.ctx.sink.emit(&SimEvent::Admitted {
                id: self.table[slot].id,
                level: Level::Q0,
            });
        }
        Ok(())
    }

    /// Drain all four levels once, in level order
    pub(super) fn run_round(&mut self) -> Result<(), SchedulerError> {
        for level in Level::ALL {
            self.run_level(level)?;
        }
        Ok(())
    }

    /// Drain one level, ordered by its policy, one burst per process
    pub(super) fn run_level(&mut self, level: Level) -> Result<(), SchedulerError> {
        let mut batch = self.queue(level).drain();
        if batch.is_empty() {
            return Ok(());
        }

        let table = &self.table;
        level
            .policy()
            .order(&mut batch, |slot| table[*slot].remaining_time);

        debug!(%level, batch = batch.len(), "Draining level");

        for slot in batch {
            if self.table[slot].is_completed {
                continue;
            }

            self.dispatch(slot, level)?;

            let record = &self.table[slot];
            if !record.is_completed {
                let (id, remaining) = (record.id, record.remaining_time);
                let next = level.next();
                self.enqueue(slot, next)?;
                self.stats.record_move(level);
                self.ctx.sink.emit(&SimEvent::Moved {
                    id,
                    from: level,
                    to: next,
                    remaining,
                });
            }
        }

        Ok(())
    }

    /// Run one burst of `slot` and wait for its report
    fn dispatch(&mut self, slot: Slot, level: Level) -> Result<(), SchedulerError> {
        let record = &mut self.table[slot];
        if record.is_completed {
            return Err(SchedulerError::DispatchCompleted(record.id));
        }
        record.current_queue = Some(level);
        record.is_running = true;
        let (id, remaining) = (record.id, record.remaining_time);

        self.ctx.sink.emit(&SimEvent::Dispatched {
            id,
            level,
            remaining,
        });
        self.stats.record_dispatch(level);

        let report = self.units[slot].run_burst(level)?;

        let record = &mut self.table[slot];
        record.apply(&report)?;
        if record.is_completed {
            self.stats.completions += 1;
        }
        Ok(())
    }

    /// Put `slot` on `level`, refusing duplicates
    fn enqueue(&mut self, slot: Slot, level: Level) -> Result<(), SchedulerError> {
        let record = &self.table[slot];
        if record.is_running || self.queues.iter().any(|queue| queue.contains(slot)) {
            return Err(SchedulerError::AlreadyQueued(record.id));
        }

        self.queue(level).enqueue(slot)?;
        self.table[slot].current_queue = Some(level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimConfig;
    use crate::monitoring::RecordingSink;
    use crate::process::context::SimContext;
    use crate::process::types::ProcessSpec;
    use std::sync::Arc;

    fn scheduler(specs: &[(char, u64)], sink: Arc<RecordingSink>) -> Scheduler {
        let specs: Vec<ProcessSpec> = specs.iter().copied().map(ProcessSpec::from).collect();
        let ctx = Arc::new(SimContext::new(SimConfig::instant(), sink));
        Scheduler::new(&specs, ctx).unwrap()
    }

    #[test]
    fn test_admit_places_all_on_q0() {
        let sink = Arc::new(RecordingSink::new());
        let mut sched = scheduler(&[('A', 3), ('B', 8)], sink);

        sched.admit_all().unwrap();

        assert_eq!(sched.queue(Level::Q0).drain(), vec![0, 1]);
        assert!(sched
            .records()
            .iter()
            .all(|r| r.current_queue == Some(Level::Q0)));
    }

    #[test]
    fn test_duplicate_enqueue_rejected() {
        let sink = Arc::new(RecordingSink::new());
        let mut sched = scheduler(&[('A', 3)], sink);

        sched.enqueue(0, Level::Q1).unwrap();
        assert_eq!(
            sched.enqueue(0, Level::Q2),
            Err(SchedulerError::AlreadyQueued('A'))
        );
    }

    #[test]
    fn test_running_process_not_enqueued() {
        let sink = Arc::new(RecordingSink::new());
        let mut sched = scheduler(&[('A', 3), ('B', 4)], sink);

        sched.table[0].is_running = true;
        assert_eq!(
            sched.enqueue(0, Level::Q0),
            Err(SchedulerError::AlreadyQueued('A'))
        );
        assert!(!sched.queue(Level::Q0).contains(0));
        assert_eq!(sched.records()[0].current_queue, None);

        sched.enqueue(1, Level::Q0).unwrap();
        assert_eq!(sched.queue(Level::Q0).drain(), vec![1]);
    }

    #[test]
    fn test_level_two_dispatches_longest_first() {
        let sink = Arc::new(RecordingSink::new());
        let mut sched = scheduler(&[('A', 4), ('B', 9)], Arc::clone(&sink));

        sched.enqueue(0, Level::Q2).unwrap();
        sched.enqueue(1, Level::Q2).unwrap();
        sched.run_level(Level::Q2).unwrap();

        assert_eq!(sink.bursts(), vec![('B', Level::Q2, 5), ('A', Level::Q2, 4)]);
        assert!(sched.records()[0].is_completed);
        assert_eq!(sched.records()[1].remaining_time, 4);
        assert_eq!(sched.queue(Level::Q3).drain(), vec![1]);
    }

    #[test]
    fn test_level_three_cycles_back_to_q0() {
        let sink = Arc::new(RecordingSink::new());
        let mut sched = scheduler(&[('A', 20), ('B', 7)], Arc::clone(&sink));

        sched.enqueue(0, Level::Q3).unwrap();
        sched.enqueue(1, Level::Q3).unwrap();
        sched.run_level(Level::Q3).unwrap();

        assert_eq!(sink.bursts(), vec![('B', Level::Q3, 5), ('A', Level::Q3, 5)]);
        assert_eq!(sched.queue(Level::Q0).drain(), vec![1, 0]);
        assert_eq!(sched.stats().cycles, 2);
        assert_eq!(sched.records()[0].current_queue, Some(Level::Q0));
    }

    #[test]
    fn test_dispatch_completed_rejected() {
        let sink = Arc::new(RecordingSink::new());
        let mut sched = scheduler(&[('A', 2)], sink);

        sched.dispatch(0, Level::Q0).unwrap();
        assert!(sched.records()[0].is_completed);
        assert_eq!(
            sched.dispatch(0, Level::Q1),
            Err(SchedulerError::DispatchCompleted('A'))
        );
    }

    #[test]
    fn test_run_single_process_full_cycle() {
        let sink = Arc::new(RecordingSink::new());
        let sched = scheduler(&[('A', 30)], Arc::clone(&sink));

        let report = sched.run().unwrap();

        assert_eq!(report.clock, 30);
        assert_eq!(report.stats.rounds, 2);
        assert_eq!(report.stats.cycles, 1);
        assert_eq!(report.stats.dispatches, 6);
        assert_eq!(
            sink.bursts().iter().map(|b| b.1).collect::<Vec<_>>(),
            vec![Level::Q0, Level::Q1, Level::Q2, Level::Q3, Level::Q0, Level::Q1]
        );
    }
}
