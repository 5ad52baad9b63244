/*!
 * Scheduler Module
 * The six simulated scheduling policies and their shared primitives
 */

pub mod clock;
pub mod fcfs;
mod non_preemptive;
mod preemptive;
pub mod priority;
pub mod round_robin;
pub mod simulation;
pub mod sjf;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use clock::SimClock;
pub use fcfs::FirstComeFirstServed;
pub use priority::{NonPreemptivePriority, PreemptivePriority};
pub use round_robin::RoundRobin;
pub use simulation::{run_policy, simulate, ScheduleOutcome};
pub use sjf::{NonPreemptiveSjf, PreemptiveSjf};
pub use timeline::{Interval, Label, Timeline, TimelineBuilder};
pub use traits::SchedulingPolicy;
pub use types::{Algorithm, TimeQuantum};
