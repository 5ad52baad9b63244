/*!
 * Process Types
 * Immutable process definitions and per-run simulation records
 */

use crate::core::types::{Priority, Ticks};
use serde::{Deserialize, Serialize};

/// Priority token accepted in process definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    High,
    Normal,
    Low,
}

impl PriorityLevel {
    /// Parse a case-insensitive token (`high`, `normal`, `low`)
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "normal" => Some(Self::Normal),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

/// Immutable process definition shared by every policy run of a case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
}

impl ProcessSpec {
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks, priority: Priority) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Mutable simulation state of one process within a single policy run
///
/// `start_time` and `finish_time` are written exactly once; the derived
/// waiting and turnaround times are fixed at completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    remaining_time: Ticks,
    start_time: Option<Ticks>,
    finish_time: Option<Ticks>,
    waiting_time: Ticks,
    turnaround_time: Ticks,
}

impl ProcessRecord {
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id.clone(),
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            remaining_time: spec.burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    #[inline]
    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    #[inline]
    pub fn start_time(&self) -> Option<Ticks> {
        self.start_time
    }

    #[inline]
    pub fn finish_time(&self) -> Option<Ticks> {
        self.finish_time
    }

    /// Waiting time (zero until completion)
    #[inline]
    pub fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }

    /// Turnaround time (zero until completion)
    #[inline]
    pub fn turnaround_time(&self) -> Ticks {
        self.turnaround_time
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Record the first dispatch; later dispatches leave `start_time` alone
    pub(crate) fn dispatch(&mut self, now: Ticks) {
        debug_assert!(
            now >= self.arrival_time,
            "Process {} dispatched at {now} before arrival {}",
            self.id,
            self.arrival_time
        );
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Consume `ticks` of CPU time, returning what is left
    pub(crate) fn execute(&mut self, ticks: Ticks) -> Ticks {
        debug_assert!(
            ticks > 0 && ticks <= self.remaining_time,
            "Process {} cannot run {ticks} ticks with {} remaining",
            self.id,
            self.remaining_time
        );
        self.remaining_time -= ticks;
        self.remaining_time
    }

    pub(crate) fn complete(&mut self, now: Ticks) {
        debug_assert_eq!(
            self.remaining_time, 0,
            "Process {} completed with work remaining",
            self.id
        );
        debug_assert!(
            self.finish_time.is_none(),
            "Process {} completed twice",
            self.id
        );

        self.finish_time = Some(now);
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}
