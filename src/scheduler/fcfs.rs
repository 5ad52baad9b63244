/*!
 * First-Come-First-Served
 * Runs processes to completion strictly in arrival order
 */

use super::clock::SimClock;
use super::non_preemptive::run_to_completion;
use super::timeline::TimelineBuilder;
use super::traits::SchedulingPolicy;
use super::types::Algorithm;
use crate::core::types::Ticks;
use crate::process::ProcessArena;

/// FCFS has no ready queue: the arrival order (stable on input order) is
/// the dispatch order
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstComeFirstServed;

impl SchedulingPolicy for FirstComeFirstServed {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn run(&self, arena: &mut ProcessArena, timeline: &mut TimelineBuilder) -> Ticks {
        let mut clock = SimClock::new();

        while let Some(idx) = arena.admit_next() {
            let arrival = arena.get(idx).arrival_time;
            if clock.now() < arrival {
                timeline.push_idle(clock.now(), arrival);
                clock.jump_to(arrival);
            }
            run_to_completion(arena, idx, &mut clock, timeline);
        }

        clock.now()
    }
}
