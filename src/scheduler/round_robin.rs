/*!
 * Round Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::clock::{idle_advance, SimClock};
use super::timeline::TimelineBuilder;
use super::traits::SchedulingPolicy;
use super::types::{Algorithm, TimeQuantum};
use crate::core::types::Ticks;
use crate::process::{ProcessArena, ProcessIdx};
use std::collections::VecDeque;

/// Each dispatch runs `min(quantum, remaining)` ticks and is recorded as its
/// own interval, even when the same process is dispatched back to back
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn run(&self, arena: &mut ProcessArena, timeline: &mut TimelineBuilder) -> Ticks {
        let quantum = self.quantum.as_ticks();
        let mut clock = SimClock::new();
        let mut queue: VecDeque<ProcessIdx> = VecDeque::with_capacity(arena.len());

        arena.admit_while(|arrival| arrival == 0, &mut queue);

        while !arena.all_completed() {
            let Some(idx) = queue.pop_front() else {
                if !idle_advance(&mut clock, arena, timeline) {
                    debug_assert!(false, "No runnable work but processes remain");
                    break;
                }
                let now = clock.now();
                arena.admit_while(|arrival| arrival == now, &mut queue);
                continue;
            };

            let before = clock.now();
            let record = arena.get_mut(idx);
            record.dispatch(before);
            let slice = quantum.min(record.remaining_time());
            let remaining = record.execute(slice);
            let after = clock.advance(slice);

            timeline.push_process(before, after, &arena.get(idx).id);

            // Arrivals during the slice are queued ahead of the process that
            // just ran
            arena.admit_while(|arrival| before < arrival && arrival <= after, &mut queue);

            if remaining == 0 {
                arena.complete(idx, after);
            } else {
                queue.push_back(idx);
            }
        }

        clock.now()
    }
}
