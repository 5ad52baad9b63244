/*!
 * Performance Metrics
 * Aggregate statistics derived from a finished policy run
 */

use crate::core::config::SimConfig;
use crate::core::types::Ticks;
use crate::process::ProcessRecord;
use crate::scheduler::Timeline;
use serde::{Deserialize, Serialize};

/// Completed-process count sampled at one checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputSample {
    pub checkpoint: Ticks,
    pub completed: usize,
}

/// Read-only metrics snapshot of one policy run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PerformanceMetrics {
    pub max_waiting: Ticks,
    pub avg_waiting: f64,
    pub max_turnaround: Ticks,
    pub avg_turnaround: f64,
    pub throughput: Vec<ThroughputSample>,
    /// Percent of elapsed time spent executing, with modeled switch overhead
    pub cpu_efficiency: f64,
    /// Timeline transitions, idle ones included
    pub context_switches: usize,
    pub idle_time: Ticks,
    pub total_time: Ticks,
}

impl PerformanceMetrics {
    /// Throughput at `checkpoint`, if it was sampled
    pub fn throughput_at(&self, checkpoint: Ticks) -> Option<usize> {
        self.throughput
            .iter()
            .find(|sample| sample.checkpoint == checkpoint)
            .map(|sample| sample.completed)
    }
}

/// Pure function of (completed processes, timeline, total time)
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    context_switch_cost: f64,
    checkpoints: Vec<Ticks>,
}

impl MetricsCalculator {
    pub fn new(config: &SimConfig) -> Self {
        Self::with_parameters(
            config.context_switch_cost,
            config.throughput_checkpoints.clone(),
        )
    }

    pub fn with_parameters(context_switch_cost: f64, checkpoints: Vec<Ticks>) -> Self {
        Self {
            context_switch_cost,
            checkpoints,
        }
    }

    pub fn compute(
        &self,
        processes: &[ProcessRecord],
        timeline: &Timeline,
        total_time: Ticks,
    ) -> PerformanceMetrics {
        let context_switches = timeline.len().saturating_sub(1);
        let idle_time = timeline.idle_time();

        let overhead = context_switches as f64 * self.context_switch_cost;
        let denominator = total_time as f64 + overhead;
        let cpu_efficiency = if denominator > 0.0 {
            (total_time.saturating_sub(idle_time)) as f64 / denominator * 100.0
        } else {
            0.0
        };

        let throughput = self
            .checkpoints
            .iter()
            .map(|&checkpoint| ThroughputSample {
                checkpoint,
                completed: processes
                    .iter()
                    .filter_map(ProcessRecord::finish_time)
                    .filter(|&finish| finish <= checkpoint)
                    .count(),
            })
            .collect();

        PerformanceMetrics {
            max_waiting: max_of(processes, ProcessRecord::waiting_time),
            avg_waiting: mean_of(processes, ProcessRecord::waiting_time),
            max_turnaround: max_of(processes, ProcessRecord::turnaround_time),
            avg_turnaround: mean_of(processes, ProcessRecord::turnaround_time),
            throughput,
            cpu_efficiency,
            context_switches,
            idle_time,
            total_time,
        }
    }
}

fn max_of(processes: &[ProcessRecord], field: fn(&ProcessRecord) -> Ticks) -> Ticks {
    processes.iter().map(field).max().unwrap_or(0)
}

fn mean_of(processes: &[ProcessRecord], field: fn(&ProcessRecord) -> Ticks) -> f64 {
    if processes.is_empty() {
        return 0.0;
    }
    // Each value fits in Ticks; their sum need not
    let sum: u128 = processes.iter().map(|p| u128::from(field(p))).sum();
    sum as f64 / processes.len() as f64
}
