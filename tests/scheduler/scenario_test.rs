/*!
 * Scheduler Scenario Tests
 * Fixed workloads with fully known dispatch sequences
 */

use mlfq_sim::{
    default_workload, resolve_workload, Level, ProcessSpec, RecordingSink, SimConfig, SimEvent,
    Simulation, SimulationReport,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn specs(entries: &[(char, u64)]) -> Vec<ProcessSpec> {
    entries.iter().copied().map(ProcessSpec::from).collect()
}

fn run_recorded(specs: Vec<ProcessSpec>) -> (SimulationReport, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let report = Simulation::new(specs)
        .with_config(SimConfig::instant())
        .with_sink(sink.clone())
        .run()
        .expect("simulation should complete");
    (report, sink)
}

#[test]
fn test_single_process() {
    let (report, sink) = run_recorded(specs(&[('A', 12)]));

    assert_eq!(
        sink.bursts(),
        vec![('A', Level::Q0, 5), ('A', Level::Q1, 5), ('A', Level::Q2, 2)]
    );
    assert_eq!(report.clock, 12);

    let outcome = report.outcomes()[0];
    assert_eq!(outcome.completion_time, 12);
    assert_eq!(outcome.turnaround_time, 12);
    assert_eq!(report.stats.rounds, 1);
}

#[test]
fn test_two_processes() {
    let (report, sink) = run_recorded(specs(&[('A', 7), ('B', 3)]));

    assert_eq!(
        sink.bursts(),
        vec![('A', Level::Q0, 5), ('B', Level::Q0, 3), ('A', Level::Q1, 2)]
    );

    let outcomes = report.outcomes();
    assert_eq!(outcomes[0].id, 'A');
    assert_eq!(outcomes[0].completion_time, 10);
    assert_eq!(outcomes[1].id, 'B');
    assert_eq!(outcomes[1].completion_time, 8);

    assert_eq!(report.clock, 10);
    assert_eq!(report.completion_order(), vec!['B', 'A']);
    assert_eq!(report.mean_turnaround(), 9.0);
    assert_eq!(report.stats.completions, 2);
    assert_eq!(report.stats.dispatches, 3);
}

#[test]
fn test_invalid_count_falls_back_to_defaults() {
    let custom = specs(&[('X', 4)]);

    let low = resolve_workload(0, custom.clone());
    let high = resolve_workload(11, custom);
    assert_eq!(low, default_workload());
    assert_eq!(high, default_workload());

    let (explicit, explicit_sink) = run_recorded(default_workload());
    let (fallback, fallback_sink) = run_recorded(low);

    assert_eq!(fallback, explicit);
    assert_eq!(fallback_sink.events(), explicit_sink.events());
    assert_eq!(explicit.clock, 1500);
}

#[test]
fn test_level_two_orders_by_descending_remaining() {
    // Both reach Q2 with 4 and 9 units remaining
    let (report, sink) = run_recorded(specs(&[('A', 14), ('B', 19)]));

    assert_eq!(
        sink.bursts(),
        vec![
            ('A', Level::Q0, 5),
            ('B', Level::Q0, 5),
            ('A', Level::Q1, 5),
            ('B', Level::Q1, 5),
            ('B', Level::Q2, 5),
            ('A', Level::Q2, 4),
            ('B', Level::Q3, 4),
        ]
    );

    let q2_dispatches: Vec<_> = sink
        .events()
        .into_iter()
        .filter_map(|event| match event {
            SimEvent::Dispatched {
                id,
                level: Level::Q2,
                remaining,
            } => Some((id, remaining)),
            _ => None,
        })
        .collect();
    assert_eq!(q2_dispatches, vec![('B', 9), ('A', 4)]);

    let outcomes = report.outcomes();
    assert_eq!(outcomes[0].completion_time, 29);
    assert_eq!(outcomes[1].completion_time, 33);
}

#[test]
fn test_level_three_runs_shortest_first_and_cycles() {
    // Q3 sees A with 30 remaining and B with 2
    let (report, sink) = run_recorded(specs(&[('A', 45), ('B', 17)]));

    let q3: Vec<_> = sink
        .bursts()
        .into_iter()
        .filter(|(_, level, _)| *level == Level::Q3)
        .collect();
    assert_eq!(q3[0], ('B', Level::Q3, 2));
    assert_eq!(q3[1], ('A', Level::Q3, 5));

    assert!(report.stats.cycles >= 1);
    assert_eq!(report.clock, 62);
}

#[test]
fn test_round_finishes_after_last_completion() {
    let (_, sink) = run_recorded(specs(&[('A', 3)]));

    let events = sink.events();
    assert_eq!(
        events.last(),
        Some(&SimEvent::RoundFinished {
            round: 1,
            clock: 3,
            all_completed: true,
        })
    );
}
