/*!
 * Scheduler Types
 * Domain types for policy selection and dispatch configuration
 */

use crate::core::errors::ConfigError;
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The six scheduling algorithms a case is run under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest remaining time first
    SjfPreemptive,
    /// Shortest burst first, run to completion
    SjfNonPreemptive,
    /// FIFO queue with a fixed time quantum
    RoundRobin,
    /// Lowest priority value first, re-evaluated every tick
    PriorityPreemptive,
    /// Lowest priority value first, run to completion
    PriorityNonPreemptive,
}

impl Algorithm {
    /// Canonical run order
    pub const ALL: [Algorithm; 6] = [
        Self::Fcfs,
        Self::SjfPreemptive,
        Self::SjfNonPreemptive,
        Self::RoundRobin,
        Self::PriorityPreemptive,
        Self::PriorityNonPreemptive,
    ];

    /// Canonical snake_case name (used in config and logs)
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::SjfPreemptive => "sjf_preemptive",
            Self::SjfNonPreemptive => "sjf_nonpreemptive",
            Self::RoundRobin => "round_robin",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::PriorityNonPreemptive => "priority_nonpreemptive",
        }
    }

    /// Tag used in artifact file names
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::SjfPreemptive => "SJF_Preemptive",
            Self::SjfNonPreemptive => "SJF_NonPreemptive",
            Self::RoundRobin => "RoundRobin",
            Self::PriorityPreemptive => "Priority_Preemptive",
            Self::PriorityNonPreemptive => "Priority_NonPreemptive",
        }
    }

    /// Human-readable name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::SjfPreemptive => "Preemptive SJF",
            Self::SjfNonPreemptive => "Non-Preemptive SJF",
            Self::RoundRobin => "Round Robin",
            Self::PriorityPreemptive => "Preemptive Priority",
            Self::PriorityNonPreemptive => "Non-Preemptive Priority",
        }
    }

    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::SjfPreemptive | Self::RoundRobin | Self::PriorityPreemptive
        )
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf_preemptive" | "srtf" | "psjf" => Ok(Self::SjfPreemptive),
            "sjf_nonpreemptive" | "sjf" => Ok(Self::SjfNonPreemptive),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority_preemptive" | "ppriority" => Ok(Self::PriorityPreemptive),
            "priority_nonpreemptive" | "priority" | "prio" => Ok(Self::PriorityNonPreemptive),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round Robin time quantum, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    pub fn new(ticks: Ticks) -> Result<Self, ConfigError> {
        if ticks == 0 {
            return Err(ConfigError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn as_ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl Serialize for TimeQuantum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("SRTF".parse::<Algorithm>().unwrap(), Algorithm::SjfPreemptive);
        assert_eq!("sjf".parse::<Algorithm>().unwrap(), Algorithm::SjfNonPreemptive);
        assert_eq!("rr".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(
            "priority_preemptive".parse::<Algorithm>().unwrap(),
            Algorithm::PriorityPreemptive
        );
        assert_eq!(
            "priority".parse::<Algorithm>().unwrap(),
            Algorithm::PriorityNonPreemptive
        );
        assert!("lottery".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_preemptive_split() {
        let preemptive: Vec<Algorithm> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_preemptive())
            .collect();
        assert_eq!(
            preemptive,
            vec![
                Algorithm::SjfPreemptive,
                Algorithm::RoundRobin,
                Algorithm::PriorityPreemptive
            ]
        );
    }

    #[test]
    fn test_tags_are_distinct() {
        let mut tags: Vec<&str> = Algorithm::ALL.iter().map(|a| a.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), 6);
    }

    #[test]
    fn test_time_quantum_validation() {
        assert!(TimeQuantum::new(0).is_err());
        assert_eq!(TimeQuantum::new(1).unwrap().as_ticks(), 1);
        assert_eq!(TimeQuantum::default().as_ticks(), 4);
    }

    #[test]
    fn test_quantum_deserialize_validates() {
        assert!(serde_json::from_str::<TimeQuantum>("0").is_err());
        assert_eq!(serde_json::from_str::<TimeQuantum>("6").unwrap().as_ticks(), 6);
    }
}
