//! Convergent replicated counters.
//!
//! State-based CRDTs: each replica mutates only its own entry and replicas
//! exchange full snapshots, merged with a per-node maximum. Any two replicas
//! that have seen the same set of updates converge to the same value,
//! regardless of merge order or repetition.
//!
//! ```text
//!   replica "a"                    replica "b"
//!   { a: 3 }                       { b: 2 }
//!       │        snapshot of b        │
//!       ▼  ◄────────────────────────  │
//!   { a: 3, b: 2 }  value() = 5       │
//! ```
//!
//! The transport that moves snapshots between replicas (gossip,
//! anti-entropy, …) is external: callers clone a counter and hand the clone
//! to the peer's [`Convergent::merge`].

pub mod g_counter;
pub mod pn_counter;

pub use g_counter::GCounter;
pub use pn_counter::PNCounter;

/// Merge a snapshot of another replica's state into this one.
///
/// Implementations must be:
/// - **commutative**: `a.merge(b)` and `b.merge(a)` converge to equal state
/// - **associative**: grouping of successive merges does not matter
/// - **idempotent**: merging the same snapshot again changes nothing
pub trait Convergent {
    /// Folds `other`'s state into `self`.
    fn merge(&mut self, other: &Self);
}
