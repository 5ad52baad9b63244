/*!
 * Policy Simulation
 * Entry point that runs one policy over a private copy of the input
 */

use super::fcfs::FirstComeFirstServed;
use super::priority::{NonPreemptivePriority, PreemptivePriority};
use super::round_robin::RoundRobin;
use super::sjf::{NonPreemptiveSjf, PreemptiveSjf};
use super::timeline::{Timeline, TimelineBuilder};
use super::traits::SchedulingPolicy;
use super::types::{Algorithm, TimeQuantum};
use crate::core::config::SimConfig;
use crate::core::types::Ticks;
use crate::monitoring::{MetricsCalculator, PerformanceMetrics};
use crate::process::{ProcessArena, ProcessRecord, ProcessSpec};
use serde::Serialize;
use tracing::debug;

impl Algorithm {
    /// Build the policy for this algorithm from `config`
    pub fn policy(&self, config: &SimConfig) -> Box<dyn SchedulingPolicy> {
        match self {
            Self::Fcfs => Box::new(FirstComeFirstServed),
            Self::SjfPreemptive => Box::new(PreemptiveSjf),
            Self::SjfNonPreemptive => Box::new(NonPreemptiveSjf),
            Self::RoundRobin => Box::new(RoundRobin::new(config.quantum)),
            Self::PriorityPreemptive => Box::new(PreemptivePriority),
            Self::PriorityNonPreemptive => Box::new(NonPreemptivePriority),
        }
    }

    /// Report title, including the quantum for Round Robin
    pub fn title(&self, quantum: TimeQuantum) -> String {
        match self {
            Self::RoundRobin => format!("{} (Q={})", self.display_name(), quantum.as_ticks()),
            _ => self.display_name().to_string(),
        }
    }
}

/// Everything one policy run produced
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleOutcome {
    pub algorithm: Algorithm,
    pub title: String,
    /// Completed processes, in completion order
    pub processes: Vec<ProcessRecord>,
    pub timeline: Timeline,
    pub total_time: Ticks,
    pub metrics: PerformanceMetrics,
}

/// Run `algorithm` over its own copy of `specs`
pub fn simulate(algorithm: Algorithm, specs: &[ProcessSpec], config: &SimConfig) -> ScheduleOutcome {
    let policy = algorithm.policy(config);
    run_policy(policy.as_ref(), specs, config)
}

/// Run an arbitrary policy over its own copy of `specs`
pub fn run_policy(
    policy: &dyn SchedulingPolicy,
    specs: &[ProcessSpec],
    config: &SimConfig,
) -> ScheduleOutcome {
    let algorithm = policy.algorithm();
    let mut arena = ProcessArena::from_specs(specs);
    let mut builder = TimelineBuilder::with_capacity(specs.len());

    let total_time = policy.run(&mut arena, &mut builder);
    debug_assert!(arena.all_completed(), "{algorithm} left processes unfinished");

    let timeline = builder.finish();
    let processes = arena.into_completed();
    let metrics = MetricsCalculator::new(config).compute(&processes, &timeline, total_time);

    debug!(
        algorithm = %algorithm,
        processes = processes.len(),
        intervals = timeline.len(),
        total_time,
        "Policy run complete"
    );

    ScheduleOutcome {
        algorithm,
        title: algorithm.title(config.quantum),
        processes,
        timeline,
        total_time,
        metrics,
    }
}
