#[derive(Debug, Default, Clone, Copy)]
pub struct LruMetricsSnapshot {
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
    pub peek_calls: u64,
    pub peek_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RingMetricsSnapshot {
    pub nodes_added: u64,
    pub nodes_removed: u64,
    pub adds_ignored: u64,
    pub removes_ignored: u64,

    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_empty: u64,
    pub lookup_wraps: u64,

    // gauges captured at snapshot time
    pub node_count: usize,
    pub vnode_count: usize,
    pub replicas: usize,
}
