//! StatCollection - Named stat values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from stat-type name ("physical", "fire", "lightning", ...) to a
/// numeric value
///
/// The stat-type enumeration is open: collections carry whatever types the
/// duel record defines. Backed by a `BTreeMap` so iteration order is
/// deterministic, and serde-transparent so it serializes as a plain JSON
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatCollection(BTreeMap<String, f64>);

impl StatCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        StatCollection(BTreeMap::new())
    }

    /// Get the value of a stat type, if present
    pub fn get(&self, stat_type: &str) -> Option<f64> {
        self.0.get(stat_type).copied()
    }

    /// Set the value of a stat type, inserting it if absent
    pub fn set(&mut self, stat_type: impl Into<String>, value: f64) {
        self.0.insert(stat_type.into(), value);
    }

    /// Whether the collection carries the given stat type
    pub fn contains(&self, stat_type: &str) -> bool {
        self.0.contains_key(stat_type)
    }

    /// Stat-type names currently present, in natural key order
    pub fn stat_types(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Iterate over (stat type, value) pairs in natural key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, f64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    /// Sum of all stat values (the raw damage of an attack collection)
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Number of stat types present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection carries no stat types at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for StatCollection {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        StatCollection(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, f64); N]> for StatCollection {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}
