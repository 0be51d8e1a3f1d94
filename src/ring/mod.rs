//! Consistent-hash ring for key-to-node placement.
//!
//! Each physical node is represented by a fixed number of virtual nodes
//! (replicas) so that keys spread evenly and membership changes only move
//! the keys adjacent to the affected positions.
//!
//! ## Architecture
//!
//! ```text
//!                     0 ──────────► u64::MAX (wraps)
//!        ring: BTreeMap<u64, String>
//!        ┌───────────────┬──────────┐
//!        │ hash position │ owner    │     node_for(key):
//!        ├───────────────┼──────────┤       h = hash(key)
//!        │ 0x05…         │ node-b   │       first position >= h,
//!        │ 0x31…         │ node-a   │       wrapping to the smallest
//!        │ 0x8f…         │ node-b   │       position when h is past
//!        │ 0xe2…         │ node-a   │       the largest entry
//!        └───────────────┴──────────┘
//!
//!        add_node(n):    insert replicas positions hash("n-0"…"n-R-1")
//!        remove_node(n): remove those same positions
//! ```
//!
//! Positions are xxHash64 (seed 0) over the virtual-key bytes: deterministic
//! across processes, well distributed across the full `u64` domain. Two
//! virtual keys hashing to the same position silently overwrite each other
//! (last writer wins); with a 64-bit domain this is an accepted edge case,
//! not an error.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hasher;

use rustc_hash::FxHashMap;
use twox_hash::XxHash64;

use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::RingMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::RingMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsSnapshotProvider, RingMetricsReadRecorder, RingMetricsRecorder,
};

/// A consistent hash ring mapping string keys to physical node names.
///
/// # Example
///
/// ```
/// use clusterkit::ring::HashRing;
///
/// let mut ring = HashRing::new(3);
/// ring.add_node("server-1");
/// ring.add_node("server-2");
/// ring.add_node("server-3");
///
/// let owner = ring.node_for("user:123").unwrap();
/// assert!(ring.nodes().iter().any(|n| n == owner));
///
/// // Same ring state, same key, same owner.
/// assert_eq!(ring.node_for("user:123"), Some(owner));
/// ```
pub struct HashRing {
    /// Virtual-node positions mapped to their owning physical node.
    ring: BTreeMap<u64, String>,
    /// Physical membership, in insertion order.
    nodes: Vec<String>,
    /// Virtual nodes per physical node; immutable after construction.
    replicas: usize,
    #[cfg(feature = "metrics")]
    metrics: RingMetrics,
}

impl HashRing {
    /// Creates an empty ring with `replicas` virtual nodes per physical node.
    ///
    /// # Panics
    ///
    /// Panics if `replicas` is zero. Use [`try_new`](Self::try_new) for a
    /// fallible constructor.
    #[inline]
    pub fn new(replicas: usize) -> Self {
        Self::try_new(replicas).expect("replicas must be > 0")
    }

    /// Creates an empty ring, rejecting a zero replica count.
    ///
    /// # Example
    ///
    /// ```
    /// use clusterkit::ring::HashRing;
    ///
    /// assert!(HashRing::try_new(16).is_ok());
    /// assert!(HashRing::try_new(0).is_err());
    /// ```
    pub fn try_new(replicas: usize) -> Result<Self, ConfigError> {
        if replicas == 0 {
            return Err(ConfigError::new("replicas must be > 0"));
        }
        Ok(Self {
            ring: BTreeMap::new(),
            nodes: Vec::new(),
            replicas,
            #[cfg(feature = "metrics")]
            metrics: RingMetrics::default(),
        })
    }

    /// Returns the number of virtual nodes per physical node.
    #[inline]
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Returns the number of physical nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the ring holds no virtual entries.
    ///
    /// Equivalent to having no physical nodes: membership and ring entries
    /// are kept in lockstep by `add_node`/`remove_node`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the number of virtual entries on the ring.
    #[inline]
    pub fn vnode_count(&self) -> usize {
        self.ring.len()
    }

    /// Returns the current physical membership.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns `true` if `node` is a tracked physical node.
    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.iter().any(|n| n == node)
    }

    /// Adds a physical node, inserting its virtual positions.
    ///
    /// Adding a node that is already present is a no-op.
    pub fn add_node(&mut self, node: &str) {
        if self.contains_node(node) {
            #[cfg(feature = "metrics")]
            self.metrics.record_add_ignored();
            return;
        }

        self.nodes.push(node.to_string());

        for i in 0..self.replicas {
            let vnode_key = format!("{}-{}", node, i);
            let hash = Self::hash_key(vnode_key.as_bytes());
            self.ring.insert(hash, node.to_string());
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_node_added();
    }

    /// Removes a physical node and its virtual positions.
    ///
    /// Removing an untracked node is a no-op.
    pub fn remove_node(&mut self, node: &str) {
        if !self.contains_node(node) {
            #[cfg(feature = "metrics")]
            self.metrics.record_remove_ignored();
            return;
        }

        self.nodes.retain(|n| n != node);

        for i in 0..self.replicas {
            let vnode_key = format!("{}-{}", node, i);
            let hash = Self::hash_key(vnode_key.as_bytes());
            self.ring.remove(&hash);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_node_removed();
    }

    /// Returns the node responsible for `key`, or `None` on an empty ring.
    ///
    /// Walks clockwise: the owner is the first virtual position at or after
    /// `hash(key)`, wrapping around to the smallest position.
    ///
    /// # Example
    ///
    /// ```
    /// use clusterkit::ring::HashRing;
    ///
    /// let mut ring = HashRing::new(8);
    /// assert_eq!(ring.node_for("anything"), None);
    ///
    /// ring.add_node("node-a");
    /// assert_eq!(ring.node_for("anything"), Some("node-a"));
    /// ```
    pub fn node_for(&self, key: &str) -> Option<&str> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_lookup_call();

        if self.ring.is_empty() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_lookup_empty();
            return None;
        }

        let hash = Self::hash_key(key.as_bytes());

        if let Some((_, node)) = self.ring.range(hash..).next() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_lookup_hit();
            return Some(node.as_str());
        }

        // Past the largest position: wrap to the smallest.
        #[cfg(feature = "metrics")]
        {
            (&self.metrics).record_lookup_wrap();
            (&self.metrics).record_lookup_hit();
        }

        self.ring.values().next().map(|s| s.as_str())
    }

    /// Histogram of synthetic-key ownership over `sample_size` keys.
    ///
    /// Intended for distribution tests and monitoring, not the hot path.
    pub fn key_distribution(&self, sample_size: usize) -> FxHashMap<String, usize> {
        let mut distribution = FxHashMap::default();

        for i in 0..sample_size {
            let key = format!("key-{}", i);
            if let Some(owner) = self.node_for(&key) {
                *distribution.entry(owner.to_string()).or_insert(0) += 1;
            }
        }

        distribution
    }

    /// Hashes bytes to a ring position: xxHash64 with seed 0.
    fn hash_key(bytes: &[u8]) -> u64 {
        let mut hasher = XxHash64::with_seed(0);
        hasher.write(bytes);
        hasher.finish()
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<RingMetricsSnapshot> for HashRing {
    fn snapshot(&self) -> RingMetricsSnapshot {
        RingMetricsSnapshot {
            nodes_added: self.metrics.nodes_added,
            nodes_removed: self.metrics.nodes_removed,
            adds_ignored: self.metrics.adds_ignored,
            removes_ignored: self.metrics.removes_ignored,
            lookup_calls: self.metrics.lookup_calls.get(),
            lookup_hits: self.metrics.lookup_hits.get(),
            lookup_empty: self.metrics.lookup_empty.get(),
            lookup_wraps: self.metrics.lookup_wraps.get(),
            node_count: self.nodes.len(),
            vnode_count: self.ring.len(),
            replicas: self.replicas,
        }
    }
}

impl fmt::Debug for HashRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRing")
            .field("nodes", &self.nodes.len())
            .field("vnodes", &self.ring.len())
            .field("replicas", &self.replicas)
            .finish_non_exhaustive()
    }
}
