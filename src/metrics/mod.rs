//! Operation counters for the stateful structures.
//!
//! Mirrors the structure of the cache cores: *recording* happens inline in
//! the hot paths (plain `u64` bumps on `&mut self` paths, [`MetricsCell`]
//! for `&self` paths), *snapshotting* is a separate read-only concern for
//! bench/test consumption.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use cell::MetricsCell;
pub use metrics_impl::{LruMetrics, RingMetrics};
pub use snapshot::{LruMetricsSnapshot, RingMetricsSnapshot};
pub use traits::MetricsSnapshotProvider;
