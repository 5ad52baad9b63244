/*!
 * Process Module
 * Process definitions, per-run records and the record arena
 */

pub mod arena;
pub mod types;
pub(crate) mod validation;

// Re-export for convenience
pub use arena::{ProcessArena, ProcessIdx, ProcessStatus};
pub use types::{PriorityLevel, ProcessRecord, ProcessSpec};
