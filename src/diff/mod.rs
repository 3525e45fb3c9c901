//! Diff engine - prefix set comparison and per-category drift reports

mod compare;
mod report;

pub use compare::{added, removed};
pub use report::{diff_snapshots, DiffStats, SnapshotDiff};
