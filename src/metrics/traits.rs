//! Recorder and snapshot traits.
//!
//! Recorders only write counters; snapshot providers only read. Hot paths
//! that take `&mut self` use the mutable recorders; read-only paths (`peek`,
//! ring lookups) go through the `*ReadRecorder` traits backed by
//! [`MetricsCell`](crate::metrics::MetricsCell).

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Metrics for LRU behavior (recency order).
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
}

/// Read-only LRU metrics for `&self` methods (uses interior mutability).
pub trait LruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}

/// Metrics for ring membership changes.
pub trait RingMetricsRecorder {
    fn record_node_added(&mut self);
    fn record_node_removed(&mut self);
    fn record_add_ignored(&mut self);
    fn record_remove_ignored(&mut self);
}

/// Read-only ring metrics for `&self` lookups (uses interior mutability).
pub trait RingMetricsReadRecorder {
    fn record_lookup_call(&self);
    fn record_lookup_hit(&self);
    fn record_lookup_empty(&self);
    fn record_lookup_wrap(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
