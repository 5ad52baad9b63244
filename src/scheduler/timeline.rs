/*!
 * CPU Timeline
 * Contiguous, ordered CPU-occupancy intervals produced by a policy run
 */

use crate::core::limits::IDLE_LABEL;
use crate::core::types::Ticks;
use serde::{Serialize, Serializer};
use std::fmt;

/// Occupant of a timeline interval
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Idle,
    Process(String),
}

impl Label {
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Label::Idle => IDLE_LABEL,
            Label::Process(id) => id,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Label::Idle)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags apply
        f.pad(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Half-open interval `[start, end)` occupied by one label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: Ticks,
    pub end: Ticks,
    pub label: Label,
}

impl Interval {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label.is_idle()
    }
}

/// Finished timeline
///
/// Starts at 0 (when non-empty) and each interval ends where the next begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// End of the last interval (0 when empty)
    pub fn end(&self) -> Ticks {
        self.intervals.last().map_or(0, |interval| interval.end)
    }

    pub fn idle_time(&self) -> Ticks {
        self.iter().filter(|i| i.is_idle()).map(Interval::duration).sum()
    }

    pub fn busy_time(&self) -> Ticks {
        self.iter().filter(|i| !i.is_idle()).map(Interval::duration).sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Accumulates intervals while a policy executes
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    intervals: Vec<Interval>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Current end of the timeline (0 when empty)
    pub fn end(&self) -> Ticks {
        self.intervals.last().map_or(0, |interval| interval.end)
    }

    /// Append a new interval without merging
    pub fn push(&mut self, start: Ticks, end: Ticks, label: Label) {
        debug_assert!(start < end, "Empty interval [{start}, {end}) for {label}");
        debug_assert_eq!(
            start,
            self.end(),
            "Interval for {label} does not continue the timeline"
        );
        self.intervals.push(Interval { start, end, label });
    }

    pub fn push_idle(&mut self, start: Ticks, end: Ticks) {
        self.push(start, end, Label::Idle);
    }

    pub fn push_process(&mut self, start: Ticks, end: Ticks, id: &str) {
        self.push(start, end, Label::Process(id.to_string()));
    }

    /// Extend the last interval when it belongs to `id` and ends at `start`,
    /// otherwise append
    pub fn extend_or_push(&mut self, start: Ticks, end: Ticks, id: &str) {
        if let Some(last) = self.intervals.last_mut() {
            if last.end == start && matches!(&last.label, Label::Process(current) if current == id)
            {
                debug_assert!(start < end);
                last.end = end;
                return;
            }
        }
        self.push_process(start, end, id);
    }

    pub fn finish(self) -> Timeline {
        Timeline {
            intervals: self.intervals,
        }
    }
}
