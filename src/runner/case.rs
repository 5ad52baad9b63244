/*!
 * Case Types
 * Named input cases and what running them produced
 */

use crate::core::errors::{ConfigError, SimulatorError};
use crate::scheduler::{Algorithm, ScheduleOutcome};
use std::path::{Path, PathBuf};

/// A named process-definition file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSpec {
    pub name: String,
    pub path: PathBuf,
}

impl CaseSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Parse a `name=path` argument
    ///
    /// A bare path is accepted too; its file stem becomes the case name.
    pub fn parse_arg(arg: &str) -> Result<Self, ConfigError> {
        let invalid = |message: &str| ConfigError::Parse {
            key: "case".to_string(),
            message: format!("{message}: '{arg}'"),
        };

        match arg.split_once('=') {
            Some((name, path)) => {
                let (name, path) = (name.trim(), path.trim());
                if name.is_empty() || path.is_empty() {
                    return Err(invalid("expected name=path"));
                }
                Ok(Self::new(name, path))
            }
            None => {
                let path = Path::new(arg.trim());
                let name = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .filter(|stem| !stem.is_empty())
                    .ok_or_else(|| invalid("cannot derive a case name"))?;
                Ok(Self::new(name, path))
            }
        }
    }

    /// `case1=case1.csv`, `case2=case2.csv`
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("case1", "case1.csv"),
            Self::new("case2", "case2.csv"),
        ]
    }
}

/// One successful policy run and the files written for it
#[derive(Debug, Clone)]
pub struct PolicyArtifact {
    pub algorithm: Algorithm,
    pub outcome: ScheduleOutcome,
    pub files: Vec<PathBuf>,
}

/// A policy run that produced no artifacts
#[derive(Debug)]
pub struct PolicyFailure {
    pub algorithm: Algorithm,
    pub error: SimulatorError,
}

#[derive(Debug)]
pub struct CaseSummary {
    pub case: String,
    pub process_count: usize,
    pub outcomes: Vec<PolicyArtifact>,
    pub failures: Vec<PolicyFailure>,
}

impl CaseSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn outcome(&self, algorithm: Algorithm) -> Option<&ScheduleOutcome> {
        self.outcomes
            .iter()
            .find(|artifact| artifact.algorithm == algorithm)
            .map(|artifact| &artifact.outcome)
    }

    /// Every file written for this case
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .flat_map(|artifact| artifact.files.iter().map(PathBuf::as_path))
    }
}

/// Result of one case within a batch
#[derive(Debug)]
pub enum CaseStatus {
    Completed(CaseSummary),
    Skipped { case: String, path: PathBuf },
    Failed { case: String, error: SimulatorError },
}

impl CaseStatus {
    pub fn case(&self) -> &str {
        match self {
            Self::Completed(summary) => &summary.case,
            Self::Skipped { case, .. } | Self::Failed { case, .. } => case,
        }
    }

    /// Failed outright, or completed with failed policies
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Completed(summary) => !summary.is_success(),
            Self::Skipped { .. } => false,
            Self::Failed { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_arg() {
        let case = CaseSpec::parse_arg("heavy=data/heavy.csv").unwrap();
        assert_eq!(case, CaseSpec::new("heavy", "data/heavy.csv"));
    }

    #[test]
    fn test_parse_bare_path_uses_stem() {
        let case = CaseSpec::parse_arg("inputs/case3.csv").unwrap();
        assert_eq!(case.name, "case3");
        assert_eq!(case.path, PathBuf::from("inputs/case3.csv"));
    }

    #[test]
    fn test_parse_rejects_empty_parts() {
        assert!(CaseSpec::parse_arg("=x.csv").is_err());
        assert!(CaseSpec::parse_arg("name=").is_err());
        assert!(CaseSpec::parse_arg("").is_err());
    }

    #[test]
    fn test_defaults() {
        let cases = CaseSpec::defaults();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "case1");
        assert_eq!(cases[1].path, PathBuf::from("case2.csv"));
    }
}
