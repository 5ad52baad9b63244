/*!
 * Simulator Configuration
 * Explicit configuration value handed to every policy run
 *
 * Environment variables:
 * - SCHED_CONFIG: path to a JSON config file (optional)
 * - SCHED_OUTPUT_DIR: directory for report artifacts
 * - SCHED_QUANTUM: Round Robin quantum in ticks
 * - SCHED_EMIT_JSON: also write JSON snapshots ("1" / "true")
 */

use super::errors::ConfigError;
use super::limits::{
    DEFAULT_CONTEXT_SWITCH_COST, DEFAULT_THROUGHPUT_CHECKPOINTS, HIGH_PRIORITY, LOW_PRIORITY,
    NORMAL_PRIORITY,
};
use super::types::{Priority, Ticks};
use crate::process::PriorityLevel;
use crate::scheduler::{Algorithm, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SCHED_CONFIG";
pub const OUTPUT_DIR_ENV: &str = "SCHED_OUTPUT_DIR";
pub const QUANTUM_ENV: &str = "SCHED_QUANTUM";
pub const EMIT_JSON_ENV: &str = "SCHED_EMIT_JSON";

/// Mapping from priority tokens to numeric priorities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PriorityMap {
    pub high: Priority,
    pub normal: Priority,
    pub low: Priority,
}

impl PriorityMap {
    #[inline]
    pub const fn resolve(&self, level: PriorityLevel) -> Priority {
        match level {
            PriorityLevel::High => self.high,
            PriorityLevel::Normal => self.normal,
            PriorityLevel::Low => self.low,
        }
    }
}

impl Default for PriorityMap {
    fn default() -> Self {
        Self {
            high: HIGH_PRIORITY,
            normal: NORMAL_PRIORITY,
            low: LOW_PRIORITY,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimConfig {
    pub quantum: TimeQuantum,
    pub context_switch_cost: f64,
    pub throughput_checkpoints: Vec<Ticks>,
    pub priority_map: PriorityMap,
    pub algorithms: Vec<Algorithm>,
    pub output_dir: PathBuf,
    pub emit_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: TimeQuantum::default(),
            context_switch_cost: DEFAULT_CONTEXT_SWITCH_COST,
            throughput_checkpoints: DEFAULT_THROUGHPUT_CHECKPOINTS.to_vec(),
            priority_map: PriorityMap::default(),
            algorithms: Algorithm::ALL.to_vec(),
            output_dir: PathBuf::from("."),
            emit_json: false,
        }
    }
}

impl SimConfig {
    /// Load from `SCHED_CONFIG` (if set) and apply environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            key: CONFIG_ENV.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the environment, in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(OUTPUT_DIR_ENV) {
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(QUANTUM_ENV) {
            let ticks = raw.trim().parse::<Ticks>().map_err(|e| ConfigError::Parse {
                key: QUANTUM_ENV.to_string(),
                message: e.to_string(),
            })?;
            self.quantum = TimeQuantum::new(ticks)?;
        }

        if let Some(raw) = lookup(EMIT_JSON_ENV) {
            self.emit_json = raw == "1" || raw.eq_ignore_ascii_case("true");
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.context_switch_cost.is_finite() || self.context_switch_cost < 0.0 {
            return Err(ConfigError::InvalidSwitchCost(self.context_switch_cost));
        }

        if self.throughput_checkpoints.is_empty() {
            return Err(ConfigError::InvalidCheckpoints("list is empty".into()));
        }
        if self
            .throughput_checkpoints
            .windows(2)
            .any(|pair| pair[0] >= pair[1])
        {
            return Err(ConfigError::InvalidCheckpoints(format!(
                "{:?} is not strictly ascending",
                self.throughput_checkpoints
            )));
        }

        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }

        Ok(())
    }

    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_json_output(mut self, emit: bool) -> Self {
        self.emit_json = emit;
        self
    }
}
