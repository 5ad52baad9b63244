/*!
 * Simulation Limits and Constants
 *
 * Default values for everything `SimConfig` lets a caller override.
 * Nothing here is read as process-wide state by the policies: each run
 * receives its values through the config it is handed.
 */

use super::types::{Priority, Ticks};

// =============================================================================
// DISPATCH
// =============================================================================

/// Round Robin time quantum (ticks per dispatch)
pub const DEFAULT_QUANTUM: Ticks = 4;

/// Modeled cost of one context switch, in ticks
/// Only used in the CPU efficiency denominator
pub const DEFAULT_CONTEXT_SWITCH_COST: f64 = 0.001;

// =============================================================================
// METRICS
// =============================================================================

/// Instants at which completed-process counts are sampled
pub const DEFAULT_THROUGHPUT_CHECKPOINTS: [Ticks; 4] = [50, 100, 150, 200];

// =============================================================================
// PRIORITY TOKENS
// =============================================================================

pub const HIGH_PRIORITY: Priority = 1;
pub const NORMAL_PRIORITY: Priority = 2;
pub const LOW_PRIORITY: Priority = 3;

// =============================================================================
// INPUT / OUTPUT
// =============================================================================

/// Timeline label for a segment with no eligible process
pub const IDLE_LABEL: &str = "IDLE";

/// Column names expected in the process definition header
pub const COLUMN_PROCESS_ID: &str = "Process_ID";
pub const COLUMN_ARRIVAL_TIME: &str = "Arrival_Time";
pub const COLUMN_BURST_TIME: &str = "CPU_Burst_Time";
pub const COLUMN_PRIORITY: &str = "Priority";

/// Prefix of every report artifact: `results_{case}_{tag}`
pub const REPORT_FILE_PREFIX: &str = "results";
