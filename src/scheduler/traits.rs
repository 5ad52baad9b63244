/*!
 * Scheduling Policy Trait
 * Interface every simulated policy implements
 */

use super::timeline::TimelineBuilder;
use super::types::Algorithm;
use crate::core::types::Ticks;
use crate::process::ProcessArena;

/// A policy drives a private arena to completion, emitting CPU intervals
///
/// Implementations are total over validated input: every process in the
/// arena is completed when `run` returns.
pub trait SchedulingPolicy: Send + Sync {
    /// Which algorithm this policy implements
    fn algorithm(&self) -> Algorithm;

    /// Simulate from time 0, returning the final clock value
    fn run(&self, arena: &mut ProcessArena, timeline: &mut TimelineBuilder) -> Ticks;
}
