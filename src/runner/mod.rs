/*!
 * Runner Module
 * Case orchestration: parallel policy tasks, join barrier, skip-on-missing
 */

pub mod case;
pub mod executor;

pub use case::{CaseSpec, CaseStatus, CaseSummary, PolicyArtifact, PolicyFailure};
pub use executor::CaseRunner;
