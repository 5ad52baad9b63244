/*!
 * I/O Module
 * Input loading and report artifacts around the simulation core
 */

pub mod loader;
pub mod report;

// Re-export for convenience
pub use loader::{load_processes, parse_processes};
pub use report::{json_file_name, render_report, report_file_name, write_report, Report};
