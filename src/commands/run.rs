//! The one-shot drift run

use crate::diff::{diff_snapshots, DiffStats, SnapshotDiff};
use crate::fetch::{build_client, build_current_snapshot};
use crate::store::{read_snapshot, roll_baseline, write_snapshot};
use crate::types::{DriftError, Snapshot};
use crate::ui::StatusReporter;
use crate::Config;
use chrono::{DateTime, Utc};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Drift counters across all categories
    pub stats: DiffStats,

    /// Number of categories in the current snapshot
    pub categories: usize,

    /// Total prefixes fetched this run
    pub current_total: usize,

    /// Whether the baseline was rolled forward (false under --dry-run)
    pub baseline_rolled: bool,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Run the full drift job: fetch, then diff/persist/rollover.
pub async fn run(config: Config) -> Result<RunSummary, DriftError> {
    let reporter = StatusReporter::new();

    let client = build_client()?;
    reporter.start_fetch();
    let current = build_current_snapshot(
        &client,
        &config,
        Some(&|provider: &str| reporter.update_fetch(provider)),
    )
    .await?;
    reporter.finish_fetch(current.len(), current.total_prefixes());

    let summary = execute(current, &config, &reporter)?;
    println!("{}", format_run_summary(&summary));
    Ok(summary)
}

/// Diff the fetched snapshot against the stored baseline and persist
/// everything.
///
/// Order matters: the latest snapshot and both reports are written first,
/// and only then is the baseline rolled forward. Any failure aborts before
/// the rollover, so a failed run can always be re-diffed against the old
/// baseline.
pub fn execute(
    current: Snapshot,
    config: &Config,
    reporter: &StatusReporter,
) -> Result<RunSummary, DriftError> {
    let started_at = Utc::now();

    reporter.start_reports();
    reporter.update_reports("Writing latest snapshot...");
    write_snapshot(&current, &config.latest_ips_file)?;

    let previous = if config.previous_ips_file.exists() {
        reporter.update_reports("Reading previous snapshot...");
        read_snapshot(&config.previous_ips_file)?
    } else {
        reporter.warn("No previous snapshot found; treating baseline as empty (first run)");
        Snapshot::new()
    };

    reporter.update_reports("Diffing against baseline...");
    let diff = diff_snapshots(&current, &previous)?;

    reporter.update_reports("Writing drift reports...");
    write_snapshot(&diff.added, &config.ips_added_file)?;
    write_snapshot(&diff.removed, &config.ips_removed_file)?;

    let baseline_rolled = if config.dry_run {
        reporter.warn("Dry-run mode: baseline not rolled forward");
        false
    } else {
        roll_baseline(&config.latest_ips_file, &config.previous_ips_file)?;
        true
    };

    reporter.finish_reports(diff.stats.added_total, diff.stats.removed_total);

    if !diff.stats.is_clean() {
        println!("{}", format_category_breakdown(&diff));
    }

    Ok(RunSummary {
        categories: current.len(),
        current_total: current.total_prefixes(),
        stats: diff.stats,
        baseline_rolled,
        started_at,
        finished_at: Utc::now(),
    })
}

fn format_run_summary(summary: &RunSummary) -> String {
    format!(
        "Drift summary:\n  Categories: {}  Prefixes: {}  Added: {}  Removed: {}  Unchanged categories: {}\n  Baseline rolled forward: {}\n  Completed at {}",
        summary.categories,
        summary.current_total,
        summary.stats.added_total,
        summary.stats.removed_total,
        summary.stats.unchanged_categories,
        if summary.baseline_rolled { "yes" } else { "no" },
        summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn format_category_breakdown(diff: &SnapshotDiff) -> String {
    let mut lines = Vec::new();
    lines.push("Changed categories:".to_string());

    for (category, added) in diff.added.iter() {
        let removed = diff.removed.get(category).unwrap_or(&[]);
        if added.is_empty() && removed.is_empty() {
            continue;
        }
        lines.push(format!(
            "  {:<18} +{} -{}",
            category,
            added.len(),
            removed.len()
        ));
        for prefix in added {
            lines.push(format!("    + {}", prefix));
        }
        for prefix in removed {
            lines.push(format!("    - {}", prefix));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prefix;

    fn prefixes(values: &[&str]) -> Vec<Prefix> {
        values.iter().map(|v| Prefix::new(*v)).collect()
    }

    fn sample_summary() -> RunSummary {
        RunSummary {
            stats: DiffStats {
                categories: 8,
                added_total: 3,
                removed_total: 1,
                unchanged_categories: 5,
            },
            categories: 8,
            current_total: 420,
            baseline_rolled: true,
            started_at: Utc::now(),
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_run_summary_contains_counters() {
        let text = format_run_summary(&sample_summary());
        assert!(text.contains("Categories: 8"));
        assert!(text.contains("Prefixes: 420"));
        assert!(text.contains("Added: 3"));
        assert!(text.contains("Removed: 1"));
        assert!(text.contains("Baseline rolled forward: yes"));
    }

    #[test]
    fn test_format_run_summary_reports_skipped_rollover() {
        let mut summary = sample_summary();
        summary.baseline_rolled = false;

        let text = format_run_summary(&summary);
        assert!(text.contains("Baseline rolled forward: no"));
    }

    #[test]
    fn test_format_category_breakdown_lists_drifted_prefixes() {
        let mut added = Snapshot::new();
        added.insert("EC2", prefixes(&["10.0.0.0/8"]));
        added.insert("S3", prefixes(&[]));
        let mut removed = Snapshot::new();
        removed.insert("EC2", prefixes(&[]));
        removed.insert("S3", prefixes(&["1.2.3.0/24"]));

        let diff = SnapshotDiff {
            added,
            removed,
            stats: DiffStats {
                categories: 2,
                added_total: 1,
                removed_total: 1,
                unchanged_categories: 0,
            },
        };

        let text = format_category_breakdown(&diff);
        assert!(text.contains("EC2"));
        assert!(text.contains("+ 10.0.0.0/8"));
        assert!(text.contains("S3"));
        assert!(text.contains("- 1.2.3.0/24"));
    }

    #[test]
    fn test_format_category_breakdown_omits_unchanged_categories() {
        let mut added = Snapshot::new();
        added.insert("Google", prefixes(&[]));
        added.insert("EC2", prefixes(&["10.0.0.0/8"]));
        let mut removed = Snapshot::new();
        removed.insert("Google", prefixes(&[]));
        removed.insert("EC2", prefixes(&[]));

        let diff = SnapshotDiff {
            added,
            removed,
            stats: DiffStats {
                categories: 2,
                added_total: 1,
                removed_total: 0,
                unchanged_categories: 1,
            },
        };

        let text = format_category_breakdown(&diff);
        assert!(!text.contains("Google"));
        assert!(text.contains("EC2"));
    }
}
