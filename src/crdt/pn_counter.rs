//! Positive-negative counter (PN-Counter).
//!
//! Two [`GCounter`]s under one node id: `p` accumulates increments, `n`
//! accumulates decrements, and the observable value is `p - n`. Both halves
//! merge independently, so the composite converges exactly as its parts do.

use crate::crdt::{Convergent, GCounter};

/// A counter supporting increments and decrements, convergent under merge.
///
/// # Example
///
/// ```
/// use clusterkit::crdt::{Convergent, PNCounter};
///
/// let mut pn1 = PNCounter::new("node-1");
/// pn1.increment();
/// pn1.increment();
/// pn1.increment();
/// pn1.decrement();
/// assert_eq!(pn1.value(), 2);
///
/// let mut pn2 = PNCounter::new("node-2");
/// pn2.increment();
/// pn2.decrement();
/// pn2.decrement();
/// assert_eq!(pn2.value(), -1);
///
/// pn1.merge(&pn2);
/// assert_eq!(pn1.value(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PNCounter {
    p: GCounter,
    n: GCounter,
}

impl PNCounter {
    /// Creates a counter for the given node id.
    pub fn new(node_id: impl Into<String>) -> Self {
        let node_id = node_id.into();
        Self {
            p: GCounter::new(node_id.clone()),
            n: GCounter::new(node_id),
        }
    }

    /// Returns the local node id.
    pub fn node_id(&self) -> &str {
        self.p.node_id()
    }

    /// Adds 1 to this replica's increment count.
    pub fn increment(&mut self) {
        self.p.increment();
    }

    /// Adds `amount` to this replica's increment count; zero is a no-op.
    pub fn increment_by(&mut self, amount: u64) {
        self.p.increment_by(amount);
    }

    /// Adds 1 to this replica's decrement count.
    pub fn decrement(&mut self) {
        self.n.increment();
    }

    /// Adds `amount` to this replica's decrement count; zero is a no-op.
    pub fn decrement_by(&mut self, amount: u64) {
        self.n.increment_by(amount);
    }

    /// Returns increments minus decrements across all known replicas.
    pub fn value(&self) -> i64 {
        self.p.value() as i64 - self.n.value() as i64
    }

    /// Returns the increment half, e.g. for snapshot transports.
    pub fn positive(&self) -> &GCounter {
        &self.p
    }

    /// Returns the decrement half, e.g. for snapshot transports.
    pub fn negative(&self) -> &GCounter {
        &self.n
    }
}

impl Convergent for PNCounter {
    /// Merges the increment and decrement halves independently.
    fn merge(&mut self, other: &Self) {
        self.p.merge(&other.p);
        self.n.merge(&other.n);
    }
}
