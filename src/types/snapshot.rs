//! Snapshot - the full per-category range state observed at one point in time

use super::Prefix;
use std::collections::HashMap;

/// All address ranges for all categories, as observed in one run.
///
/// Categories keep their insertion order because it is observable output:
/// it decides the worksheet order of every snapshot and report file.
/// Duplicate prefixes within a category are stored as-is; collapsing them
/// is the diff layer's business, not the snapshot's.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Category names in insertion order
    order: Vec<String>,

    /// Map: category name → prefixes
    entries: HashMap<String, Vec<Prefix>>,
}

impl Snapshot {
    /// Create a new empty snapshot
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert a category with its prefixes.
    ///
    /// A repeated category name replaces the previous prefixes but keeps
    /// the category's original position in the order.
    pub fn insert(&mut self, category: impl Into<String>, prefixes: Vec<Prefix>) {
        let category = category.into();
        if !self.entries.contains_key(&category) {
            self.order.push(category.clone());
        }
        self.entries.insert(category, prefixes);
    }

    /// Get the prefixes for a category
    pub fn get(&self, category: &str) -> Option<&[Prefix]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    /// Check if a category exists in the snapshot
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the snapshot has no categories at all
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of prefixes across all categories
    pub fn total_prefixes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Category names in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Iterator over (category, prefixes) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Prefix])> {
        self.order
            .iter()
            .map(|category| (category.as_str(), self.entries[category].as_slice()))
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}
