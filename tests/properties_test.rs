/*!
 * Property Tests
 * Invariants every policy must hold over arbitrary process sets
 */

use cpu_sched_sim::{simulate, Algorithm, ProcessSpec, ScheduleOutcome, SimConfig};
use proptest::prelude::*;
use std::collections::HashMap;

fn process_set() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0u64..40, 1u64..15, 1u8..=3), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(format!("P{}", i + 1), arrival, burst, priority)
            })
            .collect()
    })
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn run(algorithm: Algorithm, specs: &[ProcessSpec]) -> ScheduleOutcome {
    simulate(algorithm, specs, &SimConfig::default())
}

proptest! {
    #[test]
    fn every_process_completes_with_consistent_times(
        specs in process_set(),
        algorithm in algorithm(),
    ) {
        let outcome = run(algorithm, &specs);
        prop_assert_eq!(outcome.processes.len(), specs.len());

        for record in &outcome.processes {
            let start = record.start_time().unwrap();
            let finish = record.finish_time().unwrap();
            prop_assert!(record.is_completed());
            prop_assert!(start >= record.arrival_time);
            prop_assert!(finish >= record.arrival_time + record.burst_time);
            prop_assert_eq!(record.turnaround_time(), finish - record.arrival_time);
            prop_assert_eq!(record.waiting_time(), record.turnaround_time() - record.burst_time);
        }
    }

    #[test]
    fn timeline_is_contiguous_from_zero(
        specs in process_set(),
        algorithm in algorithm(),
    ) {
        let outcome = run(algorithm, &specs);
        let mut cursor = 0;
        for interval in &outcome.timeline {
            prop_assert_eq!(interval.start, cursor);
            prop_assert!(interval.end > interval.start);
            cursor = interval.end;
        }
        prop_assert_eq!(cursor, outcome.total_time);
        prop_assert_eq!(outcome.timeline.end(), outcome.total_time);
    }

    #[test]
    fn busy_time_matches_bursts(
        specs in process_set(),
        algorithm in algorithm(),
    ) {
        let outcome = run(algorithm, &specs);
        let total_burst: u64 = specs.iter().map(|s| s.burst_time).sum();
        prop_assert_eq!(outcome.timeline.busy_time(), total_burst);

        let mut executed: HashMap<&str, u64> = HashMap::new();
        for interval in outcome.timeline.iter().filter(|i| !i.is_idle()) {
            *executed.entry(interval.label.as_str()).or_default() += interval.duration();
        }
        for spec in &specs {
            prop_assert_eq!(executed.get(spec.id.as_str()).copied(), Some(spec.burst_time));
        }
    }

    #[test]
    fn cpu_idles_only_when_nothing_has_arrived(
        specs in process_set(),
        algorithm in algorithm(),
    ) {
        let outcome = run(algorithm, &specs);
        for interval in outcome.timeline.iter().filter(|i| i.is_idle()) {
            for record in &outcome.processes {
                let finish = record.finish_time().unwrap();
                prop_assert!(
                    finish <= interval.start || record.arrival_time >= interval.end,
                    "{} was runnable during idle [{}, {})",
                    record.id, interval.start, interval.end
                );
            }
            prop_assert!(specs.iter().any(|s| s.arrival_time == interval.end));
        }
    }

    #[test]
    fn adjacent_intervals_differ_except_round_robin(
        specs in process_set(),
        algorithm in algorithm(),
    ) {
        prop_assume!(algorithm != Algorithm::RoundRobin);
        let outcome = run(algorithm, &specs);
        for pair in outcome.timeline.as_slice().windows(2) {
            prop_assert_ne!(&pair[0].label, &pair[1].label);
        }
    }

    #[test]
    fn non_preemptive_policies_run_each_process_once(specs in process_set()) {
        for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_preemptive()) {
            let outcome = run(algorithm, &specs);
            let busy = outcome.timeline.iter().filter(|i| !i.is_idle()).count();
            prop_assert_eq!(busy, specs.len());
        }
    }

    #[test]
    fn round_robin_slices_fit_the_quantum(specs in process_set()) {
        let config = SimConfig::default();
        let outcome = simulate(Algorithm::RoundRobin, &specs, &config);
        for interval in outcome.timeline.iter().filter(|i| !i.is_idle()) {
            prop_assert!(interval.duration() <= config.quantum.as_ticks());
        }
    }

    #[test]
    fn metrics_are_consistent(
        specs in process_set(),
        algorithm in algorithm(),
    ) {
        let outcome = run(algorithm, &specs);
        let metrics = &outcome.metrics;

        prop_assert_eq!(metrics.context_switches, outcome.timeline.len().saturating_sub(1));
        prop_assert_eq!(metrics.total_time, outcome.total_time);
        prop_assert!(metrics.cpu_efficiency >= 0.0 && metrics.cpu_efficiency <= 100.0);
        prop_assert!(metrics.avg_waiting <= metrics.max_waiting as f64);
        prop_assert!(metrics.avg_turnaround <= metrics.max_turnaround as f64);

        let counts: Vec<usize> = metrics.throughput.iter().map(|s| s.completed).collect();
        prop_assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert!(counts.iter().all(|&count| count <= specs.len()));
    }

    #[test]
    fn runs_are_deterministic(
        specs in process_set(),
        algorithm in algorithm(),
    ) {
        let first = run(algorithm, &specs);
        let second = run(algorithm, &specs);
        prop_assert_eq!(&first.timeline, &second.timeline);
        prop_assert_eq!(&first.processes, &second.processes);
        prop_assert_eq!(&first.metrics, &second.metrics);
    }
}
