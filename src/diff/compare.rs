//! Prefix set comparison

use crate::types::Prefix;
use std::collections::HashSet;

/// Return every prefix present in `current` that does not appear in `previous`.
///
/// Membership is exact string equality on the prefix text. Inputs are treated
/// as sets: a prefix repeated within `current` is reported at most once, and
/// the result preserves first-occurrence order from `current`.
pub fn added(current: &[Prefix], previous: &[Prefix]) -> Vec<Prefix> {
    difference(current, previous)
}

/// Return every prefix present in `previous` that does not appear in `current`.
///
/// Mirror of [`added`]: `removed(current, previous) == added(previous, current)`.
pub fn removed(current: &[Prefix], previous: &[Prefix]) -> Vec<Prefix> {
    difference(previous, current)
}

/// Set difference `left - right`, deduplicated, in first-occurrence order.
fn difference(left: &[Prefix], right: &[Prefix]) -> Vec<Prefix> {
    let right_set: HashSet<&str> = right.iter().map(Prefix::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    left.iter()
        .filter(|prefix| !right_set.contains(prefix.as_str()) && seen.insert(prefix.as_str()))
        .cloned()
        .collect()
}
