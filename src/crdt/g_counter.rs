//! Grow-only counter (G-Counter).
//!
//! Each replica owns one entry in a node-id → count map and may only
//! increase it. The observable value is the sum of all entries; merging
//! takes the per-node maximum, so counts never move backwards.

use rustc_hash::FxHashMap;

use crate::crdt::Convergent;

/// A grow-only counter identified by a local node id.
///
/// # Example
///
/// ```
/// use clusterkit::crdt::{Convergent, GCounter};
///
/// let mut a = GCounter::new("node-a");
/// a.increment();
/// a.increment();
///
/// let mut b = GCounter::new("node-b");
/// b.increment();
///
/// a.merge(&b);
/// assert_eq!(a.value(), 3);
/// assert_eq!(a.local_value(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GCounter {
    node_id: String,
    counts: FxHashMap<String, u64>,
}

impl GCounter {
    /// Creates a counter for the given node id; every count starts at zero.
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            counts: FxHashMap::default(),
        }
    }

    /// Returns the local node id.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Adds 1 to this replica's own entry.
    pub fn increment(&mut self) {
        self.increment_by(1);
    }

    /// Adds `amount` to this replica's own entry.
    ///
    /// An amount of zero is a silent no-op. Negative amounts are
    /// unrepresentable: the argument type enforces grow-only at compile
    /// time.
    pub fn increment_by(&mut self, amount: u64) {
        if amount == 0 {
            return;
        }
        *self.counts.entry(self.node_id.clone()).or_insert(0) += amount;
    }

    /// Returns the sum of all per-node entries known to this replica.
    pub fn value(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns this replica's own entry, or 0 if it has never incremented.
    pub fn local_value(&self) -> u64 {
        self.counts.get(&self.node_id).copied().unwrap_or(0)
    }

    /// Iterates over `(node_id, count)` entries known to this replica.
    pub fn counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(node, &count)| (node.as_str(), count))
    }
}

impl Convergent for GCounter {
    /// Takes the per-node maximum of both replicas' entries.
    fn merge(&mut self, other: &Self) {
        for (node_id, &count) in &other.counts {
            let entry = self.counts.entry(node_id.clone()).or_insert(0);
            *entry = (*entry).max(count);
        }
    }
}
