/*!
 * Priority Scheduling
 * Selection key is (priority, arrival_time); smaller priority value wins
 *
 * There is no aging: a steady stream of higher-priority arrivals can starve
 * lower-priority work indefinitely.
 */

use super::non_preemptive::run_to_completion_loop;
use super::preemptive::run_tick_driven;
use super::timeline::TimelineBuilder;
use super::traits::SchedulingPolicy;
use super::types::Algorithm;
use crate::core::types::{Priority, Ticks};
use crate::process::{ProcessArena, ProcessRecord};

#[inline]
fn priority_key(process: &ProcessRecord) -> (Priority, Ticks) {
    (process.priority, process.arrival_time)
}

/// Re-evaluated every tick; a higher-priority arrival takes the CPU at the
/// next tick boundary
#[derive(Debug, Default, Clone, Copy)]
pub struct PreemptivePriority;

impl SchedulingPolicy for PreemptivePriority {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PriorityPreemptive
    }

    fn run(&self, arena: &mut ProcessArena, timeline: &mut TimelineBuilder) -> Ticks {
        run_tick_driven(arena, timeline, priority_key)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NonPreemptivePriority;

impl SchedulingPolicy for NonPreemptivePriority {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PriorityNonPreemptive
    }

    fn run(&self, arena: &mut ProcessArena, timeline: &mut TimelineBuilder) -> Ticks {
        run_to_completion_loop(arena, timeline, priority_key)
    }
}
