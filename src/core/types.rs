/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulation time in whole ticks (the clock starts at 0)
pub type Ticks = u64;

/// Numeric priority (smaller value = higher priority)
pub type Priority = u8;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimulatorError>;
