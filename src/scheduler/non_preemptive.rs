/*!
 * Run-To-Completion Loop
 * Shared by non-preemptive SJF and non-preemptive priority scheduling
 */

use super::clock::{idle_advance, SimClock};
use super::timeline::TimelineBuilder;
use crate::core::types::Ticks;
use crate::process::{ProcessArena, ProcessIdx, ProcessRecord};

/// Whenever the CPU frees up, pick the minimum-`key` ready process and run
/// its whole burst
///
/// Ties go to the earlier entry in the ready list (stable sort over an
/// arrival-ordered list).
pub(super) fn run_to_completion_loop<K, F>(
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
        arena.admit_arrived(clock.now(), &mut ready);

        if ready.is_empty() {
            if !idle_advance(&mut clock, arena, timeline) {
                debug_assert!(false, "No runnable work but processes remain");
                break;
            }
            continue;
        }

        ready.sort_by_key(|&idx| key(arena.get(idx)));
        let idx = ready.remove(0);
        run_to_completion(arena, idx, &mut clock, timeline);
    }

    clock.now()
}

/// Dispatch `idx` at the current time and run its entire burst as one interval
pub(super) fn run_to_completion(
    arena: &mut ProcessArena,
    idx: ProcessIdx,
    clock: &mut SimClock,
    timeline: &mut TimelineBuilder,
) {
    let start = clock.now();
    let record = arena.get_mut(idx);
    record.dispatch(start);
    let burst = record.remaining_time();
    record.execute(burst);
    let end = clock.advance(burst);

    timeline.push_process(start, end, &arena.get(idx).id);
    arena.complete(idx, end);
}
