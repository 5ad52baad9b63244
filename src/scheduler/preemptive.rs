/*!
 * Tick-Driven Preemptive Loop
 * Shared by preemptive SJF and preemptive priority scheduling
 */

use super::clock::{idle_advance, SimClock};
use super::timeline::TimelineBuilder;
use crate::core::types::Ticks;
use crate::process::{ProcessArena, ProcessIdx, ProcessRecord};

/// Re-select the minimum-`key` ready process every tick and run it for one tick
///
/// The ready list is sorted in place with a stable sort, so on a tie the
/// process that ran last tick stays ahead of equally ranked newcomers.
/// Consecutive ticks of the same process merge into one interval.
pub(super) fn run_tick_driven<K, F>(
    arena: &mut ProcessArena,
    timeline: &mut TimelineBuilder,
    key: F,
) -> Ticks
where
    K: Ord,
    F: Fn(&ProcessRecord) -> K,
{
    let mut clock = SimClock::new();
    let mut ready: Vec<ProcessIdx> = Vec::with_capacity(arena.len());

    while !arena.all_completed() {
        // The clock visits every arrival instant, so this admits exactly the
        // processes arriving at `now`
        arena.admit_arrived(clock.now(), &mut ready);

        if ready.is_empty() {
            if !idle_advance(&mut clock, arena, timeline) {
                debug_assert!(false, "No runnable work but processes remain");
                break;
            }
            continue;
        }

        ready.sort_by_key(|&idx| key(arena.get(idx)));
        let idx = ready[0];

        let start = clock.now();
        let record = arena.get_mut(idx);
        record.dispatch(start);
        let remaining = record.execute(1);
        let end = clock.advance(1);

        timeline.extend_or_push(start, end, &arena.get(idx).id);

        if remaining == 0 {
            arena.complete(idx, end);
            ready.remove(0);
        }
    }

    clock.now()
}
