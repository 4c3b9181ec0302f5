/*!
 * Scheduler Property Tests
 * Random workloads checked against completion and clock properties
 */

use mlfq_sim::{ProcessSpec, RecordingSink, SimConfig, SimEvent, Simulation};
use proptest::prelude::*;
use std::sync::Arc;

fn workload() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec(1u64..=60, 1..=10).prop_map(|totals| {
        totals
            .into_iter()
            .enumerate()
            .map(|(i, total)| ProcessSpec::new((b'A' + i as u8) as char, total))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_every_process_completes(specs in workload()) {
        let sink = Arc::new(RecordingSink::new());
        let report = Simulation::new(specs.clone())
            .with_config(SimConfig::instant())
            .with_sink(sink.clone())
            .run()
            .unwrap();

        // Every unit of work runs exactly once
        let total: u64 = specs.iter().map(|s| s.total_time).sum();
        prop_assert_eq!(report.clock, total);
        prop_assert_eq!(report.stats.completions, specs.len() as u64);
        prop_assert_eq!(report.stats.dispatches, sink.bursts().len() as u64);

        for record in &report.records {
            prop_assert_eq!(record.remaining_time, 0);
            prop_assert!(record.is_completed);
            prop_assert!(!record.is_running);
            prop_assert_eq!(record.turnaround_time, record.completion_time);
        }

        let bursts = sink.bursts();
        prop_assert!(bursts.iter().all(|(_, _, slice)| *slice >= 1 && *slice <= 5));
        prop_assert_eq!(bursts.iter().map(|b| b.2).sum::<u64>(), total);
    }

    #[test]
    fn prop_completion_times_non_decreasing(specs in workload()) {
        let sink = Arc::new(RecordingSink::new());
        Simulation::new(specs)
            .with_config(SimConfig::instant())
            .with_sink(sink.clone())
            .run()
            .unwrap();

        let finishes: Vec<u64> = sink
            .events()
            .into_iter()
            .filter_map(|event| match event {
                SimEvent::Completed { at, .. } => Some(at),
                _ => None,
            })
            .collect();
        prop_assert!(finishes.windows(2).all(|w| w[0] <= w[1]));
    }
}
