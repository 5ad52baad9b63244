/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Process definition errors raised while loading a case
///
/// Every variant that points at a record carries its 1-based line number.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Input contains no header row")]
    #[diagnostic(
        code(validation::empty_input),
        help("The first non-blank line must name the columns.")
    )]
    EmptyInput,

    #[error("Header is missing required column '{0}'")]
    #[diagnostic(
        code(validation::missing_column),
        help("Required columns: Process_ID, Arrival_Time, CPU_Burst_Time, Priority.")
    )]
    MissingColumn(String),

    #[error("Line {line}: missing value for '{field}'")]
    #[diagnostic(code(validation::missing_field))]
    MissingField { line: usize, field: String },

    #[error("Line {line}: '{value}' is not a valid non-negative integer for '{field}'")]
    #[diagnostic(code(validation::invalid_integer))]
    InvalidInteger {
        line: usize,
        field: String,
        value: String,
    },

    #[error("Line {line}: unknown priority '{value}'")]
    #[diagnostic(
        code(validation::unknown_priority),
        help("Priority must be one of: high, normal, low (case-insensitive).")
    )]
    UnknownPriority { line: usize, value: String },

    #[error("Line {line}: process '{id}' has a zero CPU burst")]
    #[diagnostic(
        code(validation::zero_burst),
        help("CPU_Burst_Time must be a positive integer.")
    )]
    ZeroBurst { line: usize, id: String },

    #[error("Line {line}: duplicate process id '{id}'")]
    #[diagnostic(code(validation::duplicate_id))]
    DuplicateId { line: usize, id: String },

    #[error("Line {line}: process '{id}' pushes the schedule past the representable time range")]
    #[diagnostic(
        code(validation::time_overflow),
        help("The latest arrival plus the sum of all bursts must fit in an unsigned 64-bit tick count.")
    )]
    TimeOverflow { line: usize, id: String },
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid quantum: {0} (must be at least 1 tick)")]
    #[diagnostic(code(config::invalid_quantum))]
    InvalidQuantum(u64),

    #[error("Invalid context switch cost: {0} (must be finite and non-negative)")]
    #[diagnostic(code(config::invalid_switch_cost))]
    InvalidSwitchCost(f64),

    #[error("Invalid throughput checkpoints: {0}")]
    #[diagnostic(
        code(config::invalid_checkpoints),
        help("Checkpoints must be a non-empty, strictly ascending list.")
    )]
    InvalidCheckpoints(String),

    #[error("No scheduling algorithms selected")]
    #[diagnostic(code(config::no_algorithms))]
    NoAlgorithms,

    #[error("Unknown algorithm '{0}'")]
    #[diagnostic(
        code(config::unknown_algorithm),
        help("Valid: fcfs, sjf_preemptive, sjf_nonpreemptive, round_robin, priority_preemptive, priority_nonpreemptive")
    )]
    UnknownAlgorithm(String),

    #[error("Invalid value for {key}: {message}")]
    #[diagnostic(code(config::parse))]
    Parse { key: String, message: String },

    #[error("Cannot read config file {path}: {message}")]
    #[diagnostic(code(config::read))]
    Read { path: PathBuf, message: String },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimulatorError {
    #[error("Validation error: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {source}")]
    #[diagnostic(
        code(simulator::io_error),
        help("Filesystem operation failed. Check the path and permissions.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(simulator::json_error))]
    Json(#[from] serde_json::Error),

    #[error("Policy task {algorithm} failed: {reason}")]
    #[diagnostic(
        code(simulator::task_failed),
        help("The remaining policies of the case were not affected.")
    )]
    TaskFailed { algorithm: String, reason: String },
}

impl SimulatorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimulatorError::Io {
            path: path.into(),
            source,
        }
    }
}
