/*!
 * CPU Scheduling Simulator Library
 * Six scheduling policies over a shared process model, with metrics and reports
 */

pub mod core;
pub mod io;
pub mod monitoring;
pub mod process;
pub mod runner;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    ConfigError, Priority, PriorityMap, SimConfig, SimResult, SimulatorError, Ticks,
    ValidationError,
};
pub use io::{load_processes, parse_processes, render_report, report_file_name, write_report};
pub use monitoring::{init_tracing, MetricsCalculator, PerformanceMetrics, ThroughputSample};
pub use process::{PriorityLevel, ProcessArena, ProcessRecord, ProcessSpec};
pub use runner::{CaseRunner, CaseSpec, CaseStatus, CaseSummary};
pub use scheduler::{
    run_policy, simulate, Algorithm, Interval, Label, ScheduleOutcome, SchedulingPolicy,
    TimeQuantum, Timeline,
};
