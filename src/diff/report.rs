//! Per-category drift report generation

use crate::diff::{added, removed};
use crate::types::{DriftError, Prefix, Snapshot};

/// Drift between two snapshots, split into added and removed prefixes
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotDiff {
    /// Per category: prefixes present now but not in the baseline
    pub added: Snapshot,

    /// Per category: prefixes present in the baseline but gone now
    pub removed: Snapshot,

    /// Aggregate statistics about the drift
    pub stats: DiffStats,
}

/// Statistics about a snapshot diff
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffStats {
    /// Number of categories compared
    pub categories: usize,

    /// Total prefixes added across all categories
    pub added_total: usize,

    /// Total prefixes removed across all categories
    pub removed_total: usize,

    /// Categories with no drift in either direction
    pub unchanged_categories: usize,
}

impl DiffStats {
    /// True when nothing was added or removed anywhere
    pub fn is_clean(&self) -> bool {
        self.added_total == 0 && self.removed_total == 0
    }
}

/// Compare two snapshots category by category.
///
/// The comparison runs once per category of `current`, in category order,
/// and both result snapshots keep that order. Categories present only in
/// `previous` are ignored: they are no longer tracked, so they produce no
/// report.
///
/// An entirely empty `previous` is the first-run bootstrap case and is
/// treated as an empty baseline for every category. If `previous` has
/// categories but lacks one that `current` tracks, the run cannot diff that
/// category and fails with [`DriftError::MissingCategory`].
pub fn diff_snapshots(current: &Snapshot, previous: &Snapshot) -> Result<SnapshotDiff, DriftError> {
    let mut added_snapshot = Snapshot::new();
    let mut removed_snapshot = Snapshot::new();
    let mut stats = DiffStats::default();

    for (category, current_prefixes) in current.iter() {
        let previous_prefixes: &[Prefix] = match previous.get(category) {
            Some(prefixes) => prefixes,
            None if previous.is_empty() => &[],
            None => return Err(DriftError::MissingCategory(category.to_string())),
        };

        let added_prefixes = added(current_prefixes, previous_prefixes);
        let removed_prefixes = removed(current_prefixes, previous_prefixes);

        stats.categories += 1;
        stats.added_total += added_prefixes.len();
        stats.removed_total += removed_prefixes.len();
        if added_prefixes.is_empty() && removed_prefixes.is_empty() {
            stats.unchanged_categories += 1;
        }

        added_snapshot.insert(category, added_prefixes);
        removed_snapshot.insert(category, removed_prefixes);
    }

    Ok(SnapshotDiff {
        added: added_snapshot,
        removed: removed_snapshot,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prefix;

    fn prefixes(values: &[&str]) -> Vec<Prefix> {
        values.iter().map(|v| Prefix::new(*v)).collect()
    }

    fn snapshot(categories: &[(&str, &[&str])]) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for (category, values) in categories {
            snapshot.insert(*category, prefixes(values));
        }
        snapshot
    }

    #[test]
    fn test_diff_classifies_per_category() {
        let current = snapshot(&[("EC2", &["X", "Y"]), ("S3", &["Z"])]);
        let previous = snapshot(&[("EC2", &["X"]), ("S3", &["Z", "W"])]);

        let diff = diff_snapshots(&current, &previous).expect("diff should succeed");

        assert_eq!(diff.added.get("EC2"), Some(prefixes(&["Y"]).as_slice()));
        assert_eq!(diff.added.get("S3"), Some(prefixes(&[]).as_slice()));
        assert_eq!(diff.removed.get("EC2"), Some(prefixes(&[]).as_slice()));
        assert_eq!(diff.removed.get("S3"), Some(prefixes(&["W"]).as_slice()));
    }

    #[test]
    fn test_result_snapshots_keep_current_category_order() {
        let current = snapshot(&[("B", &["1.0.0.0/8"]), ("A", &["2.0.0.0/8"])]);
        let previous = snapshot(&[("A", &[]), ("B", &[])]);

        let diff = diff_snapshots(&current, &previous).expect("diff should succeed");

        let order: Vec<&str> = diff.added.categories().collect();
        assert_eq!(order, vec!["B", "A"]);
        let order: Vec<&str> = diff.removed.categories().collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_stats_accumulate_across_categories() {
        let current = snapshot(&[("EC2", &["X", "Y"]), ("S3", &["Z"]), ("Google", &["G"])]);
        let previous = snapshot(&[("EC2", &["X"]), ("S3", &["Z", "W"]), ("Google", &["G"])]);

        let diff = diff_snapshots(&current, &previous).expect("diff should succeed");

        assert_eq!(diff.stats.categories, 3);
        assert_eq!(diff.stats.added_total, 1);
        assert_eq!(diff.stats.removed_total, 1);
        assert_eq!(diff.stats.unchanged_categories, 1);
        assert!(!diff.stats.is_clean());
    }

    #[test]
    fn test_identical_snapshots_are_clean() {
        let current = snapshot(&[("EC2", &["X"]), ("S3", &["Z"])]);

        let diff = diff_snapshots(&current, &current.clone()).expect("diff should succeed");

        assert!(diff.stats.is_clean());
        assert_eq!(diff.stats.unchanged_categories, 2);
    }

    #[test]
    fn test_empty_previous_is_bootstrap_baseline() {
        let current = snapshot(&[("EC2", &["X", "Y"]), ("S3", &["Z"])]);

        let diff = diff_snapshots(&current, &Snapshot::new()).expect("bootstrap should succeed");

        assert_eq!(diff.added.get("EC2"), Some(prefixes(&["X", "Y"]).as_slice()));
        assert_eq!(diff.added.get("S3"), Some(prefixes(&["Z"]).as_slice()));
        assert_eq!(diff.stats.removed_total, 0);
    }

    #[test]
    fn test_missing_category_in_nonempty_previous_is_fatal() {
        let current = snapshot(&[("EC2", &["X"]), ("API Gateway", &["Y"])]);
        let previous = snapshot(&[("EC2", &["X"])]);

        let err = diff_snapshots(&current, &previous).expect_err("missing sheet must fail");
        assert!(matches!(err, DriftError::MissingCategory(ref c) if c == "API Gateway"));
    }

    #[test]
    fn test_category_only_in_previous_is_ignored() {
        let current = snapshot(&[("EC2", &["X"])]);
        let previous = snapshot(&[("EC2", &["X"]), ("Retired", &["9.9.9.0/24"])]);

        let diff = diff_snapshots(&current, &previous).expect("diff should succeed");

        assert!(!diff.removed.contains("Retired"));
        assert_eq!(diff.stats.categories, 1);
        assert!(diff.stats.is_clean());
    }
}
