/*!
 * Case Executor
 * Runs every configured policy over one case in parallel and writes artifacts
 */

use super::case::{CaseSpec, CaseStatus, CaseSummary, PolicyArtifact, PolicyFailure};
use crate::core::config::SimConfig;
use crate::core::errors::SimulatorError;
use crate::core::types::SimResult;
use crate::io::{load_processes, write_report};
use crate::monitoring::PolicySpan;
use crate::process::ProcessSpec;
use crate::scheduler::{run_policy, Algorithm, ScheduleOutcome, SchedulingPolicy};
use futures::future::join_all;
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Drives cases through the configured policies
///
/// Each policy runs as its own blocking task over a shared read-only snapshot
/// of the input; no task observes another's state.
#[derive(Debug, Clone)]
pub struct CaseRunner {
    config: Arc<SimConfig>,
}

impl CaseRunner {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run every case in order, skipping those whose input is missing
    pub async fn run_all(&self, cases: &[CaseSpec]) -> Vec<CaseStatus> {
        let mut statuses = Vec::with_capacity(cases.len());

        for case in cases {
            let exists = matches!(tokio::fs::try_exists(&case.path).await, Ok(true));
            if !exists {
                warn!(case = %case.name, path = %case.path.display(), "Input not found, skipping case");
                statuses.push(CaseStatus::Skipped {
                    case: case.name.clone(),
                    path: case.path.clone(),
                });
                continue;
            }

            let status = match self.run_case(case).await {
                Ok(summary) => CaseStatus::Completed(summary),
                Err(e) => {
                    error!(case = %case.name, error = %e, "Case aborted");
                    CaseStatus::Failed {
                        case: case.name.clone(),
                        error: e,
                    }
                }
            };
            statuses.push(status);
        }

        statuses
    }

    /// Load one case and run every configured algorithm over it
    pub async fn run_case(&self, case: &CaseSpec) -> SimResult<CaseSummary> {
        info!(case = %case.name, path = %case.path.display(), "Running case");
        let specs = load_processes(&case.path, &self.config.priority_map).await?;
        self.run_specs(&case.name, specs).await
    }

    /// Run every configured algorithm over already-loaded definitions
    pub async fn run_specs(&self, case: &str, specs: Vec<ProcessSpec>) -> SimResult<CaseSummary> {
        let policies = self
            .config
            .algorithms
            .iter()
            .map(|algorithm| algorithm.policy(&self.config))
            .collect();
        self.run_policies(case, specs, policies).await
    }

    /// Run the given policies in parallel, then write their reports
    ///
    /// A policy task that panics becomes a failure entry; the remaining
    /// policies still complete and are written.
    pub async fn run_policies(
        &self,
        case: &str,
        specs: Vec<ProcessSpec>,
        policies: Vec<Box<dyn SchedulingPolicy>>,
    ) -> SimResult<CaseSummary> {
        let specs: Arc<[ProcessSpec]> = specs.into();
        let algorithms: Vec<Algorithm> = policies.iter().map(|p| p.algorithm()).collect();

        let tasks: Vec<_> = policies
            .into_iter()
            .map(|policy| {
                let specs = Arc::clone(&specs);
                let config = Arc::clone(&self.config);
                let case = case.to_string();
                tokio::task::spawn_blocking(move || {
                    let span = PolicySpan::new(&case, policy.algorithm());
                    let _entered = span.enter();
                    let outcome = run_policy(policy.as_ref(), &specs, &config);
                    span.record_intervals(outcome.timeline.len());
                    outcome
                })
            })
            .collect();

        let joined = join_all(tasks).await;

        let mut summary = CaseSummary {
            case: case.to_string(),
            process_count: specs.len(),
            outcomes: Vec::with_capacity(joined.len()),
            failures: Vec::new(),
        };

        for (algorithm, result) in algorithms.into_iter().zip(joined) {
            match result {
                Ok(outcome) => match self.write_artifacts(case, &outcome).await {
                    Ok(files) => summary.outcomes.push(PolicyArtifact {
                        algorithm,
                        outcome,
                        files,
                    }),
                    Err(e) => {
                        error!(case, algorithm = %algorithm, error = %e, "Failed to write report");
                        summary.failures.push(PolicyFailure { algorithm, error: e });
                    }
                },
                Err(join_error) => {
                    let reason = task_failure_reason(join_error);
                    error!(case, algorithm = %algorithm, reason = %reason, "Policy task failed");
                    summary.failures.push(PolicyFailure {
                        algorithm,
                        error: SimulatorError::TaskFailed {
                            algorithm: algorithm.to_string(),
                            reason,
                        },
                    });
                }
            }
        }

        info!(
            case,
            processes = summary.process_count,
            completed = summary.outcomes.len(),
            failed = summary.failures.len(),
            "Case finished"
        );

        Ok(summary)
    }

    async fn write_artifacts(
        &self,
        case: &str,
        outcome: &ScheduleOutcome,
    ) -> SimResult<Vec<std::path::PathBuf>> {
        write_report(&self.config.output_dir, case, outcome, self.config.emit_json).await
    }
}

fn task_failure_reason(err: JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }

    let payload = err.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "policy task panicked".to_string()
    }
}
