use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, RingMetricsReadRecorder,
    RingMetricsRecorder,
};

#[derive(Debug, Default)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
}

impl CoreMetricsRecorder for LruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {}
}

impl LruMetricsRecorder for LruMetrics {
    fn record_pop_lru_call(&mut self) {
        self.pop_lru_calls += 1;
    }

    fn record_pop_lru_found(&mut self) {
        self.pop_lru_found += 1;
    }

    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }
}

impl LruMetricsReadRecorder for &LruMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }

    fn record_recency_rank_call(&self) {
        self.recency_rank_calls.incr();
    }

    fn record_recency_rank_found(&self) {
        self.recency_rank_found.incr();
    }

    fn record_recency_rank_scan_step(&self) {
        self.recency_rank_scan_steps.incr();
    }
}

#[derive(Debug, Default)]
pub struct RingMetrics {
    pub nodes_added: u64,
    pub nodes_removed: u64,
    pub adds_ignored: u64,
    pub removes_ignored: u64,
    pub lookup_calls: MetricsCell,
    pub lookup_hits: MetricsCell,
    pub lookup_empty: MetricsCell,
    pub lookup_wraps: MetricsCell,
}

impl RingMetricsRecorder for RingMetrics {
    fn record_node_added(&mut self) {
        self.nodes_added += 1;
    }

    fn record_node_removed(&mut self) {
        self.nodes_removed += 1;
    }

    fn record_add_ignored(&mut self) {
        self.adds_ignored += 1;
    }

    fn record_remove_ignored(&mut self) {
        self.removes_ignored += 1;
    }
}

impl RingMetricsReadRecorder for &RingMetrics {
    fn record_lookup_call(&self) {
        self.lookup_calls.incr();
    }

    fn record_lookup_hit(&self) {
        self.lookup_hits.incr();
    }

    fn record_lookup_empty(&self) {
        self.lookup_empty.incr();
    }

    fn record_lookup_wrap(&self) {
        self.lookup_wraps.incr();
    }
}
