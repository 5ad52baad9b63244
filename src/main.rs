/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Runs each input case under every configured policy:
 * - FCFS, Preemptive and Non-Preemptive SJF
 * - Round Robin
 * - Preemptive and Non-Preemptive Priority
 *
 * Usage: cpu-sched-sim [name=path ...]   (default: case1=case1.csv case2=case2.csv)
 */

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use cpu_sched_sim::{init_tracing, CaseRunner, CaseSpec, CaseStatus, SimConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured tracing
    init_tracing();

    info!("CPU scheduling simulator starting...");
    info!("================================================");

    let config = SimConfig::from_env().context("Invalid simulator configuration")?;
    info!(
        quantum = config.quantum.as_ticks(),
        algorithms = config.algorithms.len(),
        output_dir = %config.output_dir.display(),
        json = config.emit_json,
        "Configuration loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cases = if args.is_empty() {
        CaseSpec::defaults()
    } else {
        args.iter()
            .map(|arg| CaseSpec::parse_arg(arg))
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid case argument")?
    };

    let runner = CaseRunner::new(config);
    let statuses = runner.run_all(&cases).await;

    info!("================================================");
    let mut failed = 0usize;
    for status in &statuses {
        match status {
            CaseStatus::Completed(summary) => {
                info!(
                    case = %summary.case,
                    processes = summary.process_count,
                    reports = summary.files().count(),
                    failures = summary.failures.len(),
                    "Case complete"
                );
                for failure in &summary.failures {
                    warn!(case = %summary.case, algorithm = %failure.algorithm, error = %failure.error, "Policy failed");
                }
            }
            CaseStatus::Skipped { case, path } => {
                info!(case = %case, path = %path.display(), "Case skipped");
            }
            CaseStatus::Failed { case, error } => {
                warn!(case = %case, error = %error, "Case failed");
            }
        }
        if status.is_failure() {
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} case(s) did not complete cleanly", statuses.len());
    }

    info!("All cases processed");
    Ok(())
}
