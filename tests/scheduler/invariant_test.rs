/*!
 * Scheduler Invariant Tests
 * Ordering, ownership and determinism checks over full runs
 */

use mlfq_sim::{
    default_workload, Level, ProcessSpec, RecordingSink, SimConfig, SimEvent, Simulation,
};
use pretty_assertions::assert_eq;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

fn record(specs: Vec<ProcessSpec>, config: SimConfig) -> Vec<SimEvent> {
    let sink = Arc::new(RecordingSink::new());
    Simulation::new(specs)
        .with_config(config)
        .with_sink(sink.clone())
        .run()
        .expect("simulation should complete");
    sink.events()
}

#[test]
fn test_dispatch_sequence_is_deterministic() {
    let first = record(default_workload(), SimConfig::instant());
    let second = record(default_workload(), SimConfig::instant());
    assert_eq!(first, second);
}

#[test]
fn test_wall_clock_delay_does_not_change_schedule() {
    let specs = vec![
        ProcessSpec::new('A', 23),
        ProcessSpec::new('B', 9),
        ProcessSpec::new('C', 31),
    ];

    let instant = record(specs.clone(), SimConfig::instant());
    let delayed = record(
        specs,
        SimConfig::instant().with_unit_delay(Duration::from_micros(200)),
    );
    assert_eq!(instant, delayed);
}

#[test]
fn test_completed_process_never_dispatched() {
    let events = record(default_workload(), SimConfig::instant());
    let mut completed = HashSet::new();

    for event in &events {
        match event {
            SimEvent::Dispatched { id, .. } => {
                assert!(!completed.contains(id), "{} dispatched after completion", id)
            }
            SimEvent::Completed { id, .. } => {
                assert!(completed.insert(*id), "{} completed twice", id);
            }
            _ => {}
        }
    }
    assert_eq!(completed.len(), 5);
}

#[test]
fn test_bursts_never_overlap_and_follow_dispatch() {
    let events = record(default_workload(), SimConfig::instant());

    // Every burst start is immediately preceded by the dispatch of the same process
    for pair in events.windows(2) {
        if let SimEvent::BurstStarted { id, level, .. } = &pair[1] {
            match &pair[0] {
                SimEvent::Dispatched {
                    id: dispatched,
                    level: at,
                    ..
                } => {
                    assert_eq!(dispatched, id);
                    assert_eq!(at, level);
                }
                other => panic!("burst of {} not preceded by dispatch: {:?}", id, other),
            }
        }
    }
}

#[test]
fn test_each_process_tracked_on_one_level() {
    let events = record(default_workload(), SimConfig::instant());
    let mut location: HashMap<char, Level> = HashMap::new();

    for event in &events {
        match event {
            SimEvent::Admitted { id, level } => {
                assert!(location.insert(*id, *level).is_none());
            }
            SimEvent::Dispatched { id, level, .. } => {
                assert_eq!(location.get(id), Some(level));
            }
            SimEvent::Moved { id, from, to, .. } => {
                assert_eq!(location.get(id), Some(from));
                assert_eq!(*to, from.next());
                location.insert(*id, *to);
            }
            SimEvent::Completed { id, .. } => {
                location.remove(id);
            }
            _ => {}
        }
    }
    assert!(location.is_empty());
}

#[test]
fn test_burst_sizes_bounded_by_quantum() {
    let config = SimConfig::instant().with_quantum(7);
    let sink = Arc::new(RecordingSink::new());
    let report = Simulation::new(default_workload())
        .with_config(config)
        .with_sink(sink.clone())
        .run()
        .unwrap();

    assert!(sink.bursts().iter().all(|(_, _, slice)| *slice >= 1 && *slice <= 7));
    assert_eq!(report.clock, 1500);
}
