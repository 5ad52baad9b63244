/*!
 * Shortest Job First
 * Preemptive (shortest remaining time) and non-preemptive (shortest burst)
 */

use super::non_preemptive::run_to_completion_loop;
use super::preemptive::run_tick_driven;
use super::timeline::TimelineBuilder;
use super::traits::SchedulingPolicy;
use super::types::Algorithm;
use crate::core::types::Ticks;
use crate::process::ProcessArena;

/// Minimum remaining time wins each tick
#[derive(Debug, Default, Clone, Copy)]
pub struct PreemptiveSjf;

impl SchedulingPolicy for PreemptiveSjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SjfPreemptive
    }

    fn run(&self, arena: &mut ProcessArena, timeline: &mut TimelineBuilder) -> Ticks {
        run_tick_driven(arena, timeline, |p| p.remaining_time())
    }
}

/// Minimum burst wins whenever the CPU frees up
#[derive(Debug, Default, Clone, Copy)]
pub struct NonPreemptiveSjf;

impl SchedulingPolicy for NonPreemptiveSjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SjfNonPreemptive
    }

    fn run(&self, arena: &mut ProcessArena, timeline: &mut TimelineBuilder) -> Ticks {
        run_to_completion_loop(arena, timeline, |p| p.burst_time)
    }
}
