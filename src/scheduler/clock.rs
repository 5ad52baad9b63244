/*!
 * Simulation Clock
 * Monotonic tick counter and the shared idle-advance rule
 */

use super::timeline::TimelineBuilder;
use crate::core::types::Ticks;
use crate::process::ProcessArena;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimClock {
    now: Ticks,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Advance by `delta` ticks, returning the new time
    #[inline]
    pub fn advance(&mut self, delta: Ticks) -> Ticks {
        self.now += delta;
        self.now
    }

    #[inline]
    pub fn jump_to(&mut self, time: Ticks) {
        debug_assert!(time >= self.now, "Clock moved backwards: {} -> {time}", self.now);
        self.now = time;
    }
}

/// Idle-advance rule: with nothing ready, jump to the next arrival and
/// record the gap as one IDLE interval
///
/// Returns false when there is no later arrival to wait for.
pub(super) fn idle_advance(
    clock: &mut SimClock,
    arena: &ProcessArena,
    timeline: &mut TimelineBuilder,
) -> bool {
    match arena.next_arrival() {
        Some(next) if next > clock.now() => {
            timeline.push_idle(clock.now(), next);
            clock.jump_to(next);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    #[test]
    fn test_clock_is_monotonic() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.advance(3), 3);
        clock.jump_to(7);
        assert_eq!(clock.now(), 7);
    }

    #[test]
    fn test_idle_advance_records_gap() {
        let arena = ProcessArena::from_specs(&[ProcessSpec::new("P1", 5, 1, 1)]);
        let mut clock = SimClock::new();
        let mut timeline = TimelineBuilder::new();

        assert!(idle_advance(&mut clock, &arena, &mut timeline));
        assert_eq!(clock.now(), 5);

        let timeline = timeline.finish();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.idle_time(), 5);
    }

    #[test]
    fn test_idle_advance_without_future_arrival() {
        let arena = ProcessArena::from_specs(&[ProcessSpec::new("P1", 0, 1, 1)]);
        let mut clock = SimClock::new();
        let mut timeline = TimelineBuilder::new();

        assert!(!idle_advance(&mut clock, &arena, &mut timeline));
        assert_eq!(clock.now(), 0);
        assert!(timeline.finish().is_empty());
    }
}
