/*!
 * Report Writer
 * Human-readable result files (and optional JSON snapshots) per policy run
 */

use crate::core::errors::SimulatorError;
use crate::core::limits::REPORT_FILE_PREFIX;
use crate::core::types::SimResult;
use crate::scheduler::{Algorithm, ScheduleOutcome};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

const WIDE_RULE: &str =
    "================================================================================";
const NARROW_RULE: &str = "--------------------------------------------------";

/// `results_{case}_{tag}.txt`
pub fn report_file_name(case: &str, algorithm: Algorithm) -> String {
    format!("{}_{}_{}.txt", REPORT_FILE_PREFIX, case, algorithm.tag())
}

/// `results_{case}_{tag}.json`
pub fn json_file_name(case: &str, algorithm: Algorithm) -> String {
    format!("{}_{}_{}.json", REPORT_FILE_PREFIX, case, algorithm.tag())
}

/// Display adapter rendering the full text report of one outcome
pub struct Report<'a>(pub &'a ScheduleOutcome);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let metrics = &outcome.metrics;

        writeln!(f, "{WIDE_RULE}")?;
        writeln!(f, "{} - CPU SCHEDULING RESULTS", outcome.title)?;
        writeln!(f, "{WIDE_RULE}")?;
        writeln!(f)?;

        writeln!(f, "TIME TABLE:")?;
        writeln!(f, "{NARROW_RULE}")?;
        for interval in &outcome.timeline {
            writeln!(
                f,
                "[{:4}] -- {:<6} -- [{:4}]",
                interval.start, interval.label, interval.end
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{WIDE_RULE}")?;
        writeln!(f)?;

        writeln!(f, "PERFORMANCE METRICS:")?;
        writeln!(f, "{NARROW_RULE}")?;
        writeln!(f, "Maximum Waiting Time: {:.2} units", metrics.max_waiting as f64)?;
        writeln!(f, "Average Waiting Time: {:.2} units", metrics.avg_waiting)?;
        writeln!(
            f,
            "Maximum Turnaround Time: {:.2} units",
            metrics.max_turnaround as f64
        )?;
        writeln!(
            f,
            "Average Turnaround Time: {:.2} units",
            metrics.avg_turnaround
        )?;
        writeln!(f)?;
        writeln!(f, "Throughput (completed processes):")?;
        for sample in &metrics.throughput {
            let label = format!("T={}", sample.checkpoint);
            writeln!(f, "  {:<6}: {} processes", label, sample.completed)?;
        }
        writeln!(f)?;
        writeln!(f, "CPU Efficiency: {:.2}%", metrics.cpu_efficiency)?;
        writeln!(f, "Total Context Switches: {}", metrics.context_switches)?;
        writeln!(f)?;
        writeln!(f, "{WIDE_RULE}")?;
        writeln!(f)?;

        writeln!(f, "PROCESS SUMMARY:")?;
        writeln!(f, "{NARROW_RULE}")?;
        writeln!(
            f,
            "{:<8} {:>7} {:>5} {:>8} {:>5} {:>6} {:>7} {:>10}",
            "ID", "Arrival", "Burst", "Priority", "Start", "Finish", "Waiting", "Turnaround"
        )?;
        for process in &outcome.processes {
            writeln!(
                f,
                "{:<8} {:>7} {:>5} {:>8} {:>5} {:>6} {:>7} {:>10}",
                process.id,
                process.arrival_time,
                process.burst_time,
                process.priority,
                process.start_time().unwrap_or_default(),
                process.finish_time().unwrap_or_default(),
                process.waiting_time(),
                process.turnaround_time()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{WIDE_RULE}")
    }
}

pub fn render_report(outcome: &ScheduleOutcome) -> String {
    Report(outcome).to_string()
}

/// Write the report (and JSON snapshot when requested) into `dir`
///
/// Returns the paths written.
pub async fn write_report(
    dir: &Path,
    case: &str,
    outcome: &ScheduleOutcome,
    emit_json: bool,
) -> SimResult<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| SimulatorError::io(dir, e))?;

    let mut written = Vec::with_capacity(2);

    let path = dir.join(report_file_name(case, outcome.algorithm));
    tokio::fs::write(&path, render_report(outcome))
        .await
        .map_err(|e| SimulatorError::io(&path, e))?;
    written.push(path);

    if emit_json {
        let path = dir.join(json_file_name(case, outcome.algorithm));
        let json = serde_json::to_string_pretty(outcome)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| SimulatorError::io(&path, e))?;
        written.push(path);
    }

    debug!(case, algorithm = %outcome.algorithm, files = written.len(), "Report written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimConfig;
    use crate::process::ProcessSpec;
    use crate::scheduler::simulate;

    fn sample_outcome(algorithm: Algorithm) -> ScheduleOutcome {
        let specs = vec![ProcessSpec::new("P1", 0, 5, 1), ProcessSpec::new("P2", 1, 3, 3)];
        simulate(algorithm, &specs, &SimConfig::default())
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            report_file_name("case1", Algorithm::Fcfs),
            "results_case1_FCFS.txt"
        );
        assert_eq!(
            report_file_name("case2", Algorithm::PriorityNonPreemptive),
            "results_case2_Priority_NonPreemptive.txt"
        );
        assert_eq!(
            json_file_name("case1", Algorithm::RoundRobin),
            "results_case1_RoundRobin.json"
        );
    }

    #[test]
    fn test_time_table_lines() {
        let report = render_report(&sample_outcome(Algorithm::SjfPreemptive));
        assert!(report.contains("[   0] -- P1     -- [   1]\n"));
        assert!(report.contains("[   1] -- P2     -- [   4]\n"));
        assert!(report.contains("[   4] -- P1     -- [   8]\n"));
    }

    #[test]
    fn test_metrics_block() {
        let report = render_report(&sample_outcome(Algorithm::Fcfs));
        assert!(report.starts_with(WIDE_RULE));
        assert!(report.contains("FCFS - CPU SCHEDULING RESULTS"));
        assert!(report.contains("Maximum Waiting Time: 4.00 units"));
        assert!(report.contains("Average Waiting Time: 2.00 units"));
        assert!(report.contains("Average Turnaround Time: 6.00 units"));
        assert!(report.contains("  T=50  : 2 processes"));
        assert!(report.contains("  T=200 : 2 processes"));
        assert!(report.contains("CPU Efficiency: 99.99%"));
        assert!(report.contains("Total Context Switches: 1"));
    }

    #[test]
    fn test_round_robin_title_carries_quantum() {
        let report = render_report(&sample_outcome(Algorithm::RoundRobin));
        assert!(report.contains("Round Robin (Q=4) - CPU SCHEDULING RESULTS"));
    }

    #[tokio::test]
    async fn test_write_report_with_json() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = sample_outcome(Algorithm::Fcfs);

        let written = write_report(dir.path(), "case1", &outcome, true).await.unwrap();
        assert_eq!(written.len(), 2);

        let text = std::fs::read_to_string(dir.path().join("results_case1_FCFS.txt")).unwrap();
        assert_eq!(text, render_report(&outcome));

        let json = std::fs::read_to_string(dir.path().join("results_case1_FCFS.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "fcfs");
        assert_eq!(value["timeline"][1]["label"], "P2");
        assert_eq!(value["metrics"]["context_switches"], 1);
    }
}
