//! LRU cache: fixed capacity, least-recently-used eviction, O(1) operations.
//!
//! ## Design
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                       LruCache<K, V>                         │
//!   │                                                              │
//!   │   index: FxHashMap<K, SlotId>        order: IntrusiveList    │
//!   │   ┌─────────┬────────┐               front = most recent     │
//!   │   │ key     │ SlotId │               back  = least recent    │
//!   │   ├─────────┼────────┤                                       │
//!   │   │ "a"     │ id_2   │    head ─► [id_2] ◄──► [id_0] ◄──►    │
//!   │   │ "b"     │ id_0   │            [id_1] ◄── tail            │
//!   │   │ "c"     │ id_1   │                                       │
//!   │   └─────────┴────────┘    each node: Entry { key, value }    │
//!   └──────────────────────────────────────────────────────────────┘
//!
//!   get(k):    index lookup → move node to front → return value
//!   insert(k): existing → replace value, move to front (never evicts)
//!              new → evict back node if full, push front
//! ```
//!
//! The recency list lives in a [`SlotArena`](crate::ds::SlotArena) and nodes
//! are linked by `SlotId` handles, so all splice operations are O(1) safe
//! Rust with no raw pointers.
//!
//! ## Failure Semantics
//!
//! - Misses and evictions are expected outcomes: `get` returns `None`,
//!   eviction is silent. No errors on the hot path.
//! - Zero capacity is rejected at construction ([`LruCache::try_new`]
//!   returns [`ConfigError`]; [`LruCache::new`] panics). Capacity is never
//!   clamped.
//!
//! ## Thread Safety
//!
//! - `LruCache`: **NOT thread-safe** - single-threaded only
//! - `ConcurrentLruCache`: thread-safe wrapper via `parking_lot::RwLock`
//!   (feature `concurrency`)

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Entry stored in the recency list.
///
/// The key is duplicated here so that evicting the back node can also remove
/// the index entry without a reverse lookup.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A single-threaded LRU cache with O(1) get, insert, and eviction.
///
/// # Example
///
/// ```
/// use clusterkit::policy::lru::LruCache;
/// use clusterkit::traits::CoreCache;
///
/// let mut cache = LruCache::new(2);
/// cache.insert(1, 10);
/// cache.insert(2, 20);
/// assert_eq!(cache.get(&1), Some(&10));
///
/// // Key 2 is now least recently used; inserting a third entry evicts it.
/// cache.insert(3, 30);
/// assert_eq!(cache.get(&2), None);
/// assert!(cache.contains(&1));
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for a
    /// fallible constructor.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).expect("capacity must be > 0")
    }

    /// Creates a cache with the given capacity, rejecting zero.
    ///
    /// # Example
    ///
    /// ```
    /// use clusterkit::policy::lru::LruCache;
    ///
    /// assert!(LruCache::<u64, u64>::try_new(8).is_ok());
    /// assert!(LruCache::<u64, u64>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Reads a value without updating recency order.
    ///
    /// # Example
    ///
    /// ```
    /// use clusterkit::policy::lru::LruCache;
    /// use clusterkit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// // Peek doesn't affect LRU order...
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    ///
    /// // ...so key 1 is still evicted first.
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let &id = self.index.get(key)?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_found();

        self.order.get(id).map(|entry| &entry.value)
    }

    /// Verifies index/list agreement and the capacity bound.
    ///
    /// Intended for tests and diagnostics; O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index len {} != order len {}",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.order.len(),
                self.capacity
            )));
        }
        for id in self.order.iter_ids() {
            let entry = self
                .order
                .get(id)
                .ok_or_else(|| InvariantError::new("dangling id in order list"))?;
            match self.index.get(&entry.key) {
                Some(&mapped) if mapped == id => {},
                Some(_) => {
                    return Err(InvariantError::new("index maps key to a different node"));
                },
                None => return Err(InvariantError::new("list key missing from index")),
            }
        }
        Ok(())
    }

    fn validate_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            self.order.debug_validate_invariants();
            if let Err(err) = self.check_invariants() {
                panic!("lru invariant violated: {}", err);
            }
        }
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// Updating an existing key never evicts. Inserting a new key into a
    /// full cache evicts the least recently used entry first, so `len()`
    /// never exceeds `capacity()`.
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = self
                .order
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            self.order.move_to_front(id);

            self.validate_invariants();

            return previous;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some(tail) = self.order.back_id() {
                if let Some(evicted) = self.order.remove(tail) {
                    self.index.remove(&evicted.key);
                    #[cfg(feature = "metrics")]
                    self.metrics.record_evicted_entry();
                }
            }
        }

        let id = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        self.validate_invariants();

        None
    }

    /// Gets a reference to a value, marking the key most recently used.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(id);

        self.validate_invariants();

        self.order.get(id).map(|entry| &entry.value)
    }

    /// Returns `true` if the key is present, without touching recency order.
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.order.clear();
        self.index.clear();

        self.validate_invariants();
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Removes a key, returning its value if it was present.
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        let entry = self.order.remove(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        self.validate_invariants();

        entry.map(|entry| entry.value)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Removes and returns the least recently used entry.
    ///
    /// # Example
    ///
    /// ```
    /// use clusterkit::policy::lru::LruCache;
    /// use clusterkit::traits::{CoreCache, LruCacheTrait};
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    ///
    /// assert_eq!(cache.pop_lru(), Some((1, "one")));
    /// assert_eq!(cache.len(), 1);
    /// ```
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let tail = self.order.back_id()?;
        let entry = self.order.remove(tail)?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        self.validate_invariants();

        Some((entry.key, entry.value))
    }

    /// Returns the least recently used entry without affecting order.
    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Marks a key as most recently used; `false` if absent.
    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        if let Some(&id) = self.index.get(key) {
            self.order.move_to_front(id);

            #[cfg(feature = "metrics")]
            self.metrics.record_touch_found();

            self.validate_invariants();

            true
        } else {
            false
        }
    }

    /// Returns the recency position of a key: 0 is most recent. O(n).
    fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let &target = self.index.get(key)?;
        let mut rank = 0usize;

        for id in self.order.iter_ids() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();
                return Some(rank);
            }
            rank += 1;
        }
        None
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Thread-safe LRU cache wrapper using `parking_lot::RwLock`.
///
/// Clones share the same underlying cache. Values are returned by clone
/// because references cannot escape the lock.
///
/// # Example
///
/// ```
/// use clusterkit::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u64, String> = ConcurrentLruCache::new(100);
/// cache.insert(1, "one".to_string());
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// ```
#[cfg(feature = "concurrency")]
#[derive(Clone)]
pub struct ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<RwLock<LruCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a thread-safe cache with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Creates a thread-safe cache, rejecting zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LruCache::try_new(capacity)?)),
        })
    }

    /// Inserts a key-value pair, returning the previous value if it existed.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut cache = self.inner.write();
        cache.insert(key, value)
    }

    /// Gets a value by key, marking it most recently used.
    ///
    /// Requires a write lock because it updates recency order.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.write();
        cache.get(key).cloned()
    }

    /// Reads a value without updating recency order.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let cache = self.inner.read();
        cache.peek(key).cloned()
    }

    /// Returns `true` if the key is present, without touching recency order.
    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        let mut cache = self.inner.write();
        cache.pop_lru()
    }

    /// Marks a key as most recently used; `false` if absent.
    pub fn touch(&self, key: &K) -> bool {
        let mut cache = self.inner.write();
        cache.touch(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear();
    }

    /// Captures a metrics snapshot of the underlying cache.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        let cache = self.inner.read();
        cache.snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> crate::traits::ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_hits_and_misses() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        assert_eq!(cache.get(&1), Some(&10));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn eviction_order_is_least_recent_first() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.get(&1), Some(&10));

        // Key 2 is least recent, so a new insert evicts it.
        cache.insert(3, 30);
        assert_eq!(cache.get(&2), None);
        assert!(cache.contains(&1));
        assert!(cache.contains(&3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn capacity_one_evicts_previous() {
        let mut cache = LruCache::new(1);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn inserting_capacity_plus_one_evicts_first_inserted() {
        let capacity = 5;
        let mut cache = LruCache::new(capacity);
        for i in 0..=capacity as u64 {
            cache.insert(i, i);
        }
        assert!(!cache.contains(&0));
        for i in 1..=capacity as u64 {
            assert!(cache.contains(&i));
        }
        assert_eq!(cache.len(), capacity);
    }

    #[test]
    fn update_existing_key_never_evicts() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.insert(1, 11), Some(10));
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&2));
        assert_eq!(cache.get(&1), Some(&11));
    }

    #[test]
    fn update_marks_key_most_recent() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(1, 11);

        // Key 2 is now least recent.
        cache.insert(3, 30);
        assert!(!cache.contains(&2));
        assert!(cache.contains(&1));
    }

    #[test]
    fn contains_does_not_affect_eviction_order() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert!(cache.contains(&1));

        // contains() above must not have promoted key 1.
        cache.insert(3, 30);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
    }

    #[test]
    fn peek_does_not_affect_eviction_order() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.peek(&1), Some(&10));

        cache.insert(3, 30);
        assert!(!cache.contains(&1));
    }

    #[test]
    fn get_on_miss_leaves_size_unchanged() {
        let mut cache: LruCache<u64, u64> = LruCache::new(2);
        cache.insert(1, 10);
        assert_eq!(cache.get(&99), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn scenario_capacity_two_walkthrough() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.get(&1), Some(&10));

        cache.insert(3, 30);
        assert_eq!(cache.get(&2), None);
        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn try_new_rejects_zero_capacity() {
        let err = LruCache::<u64, u64>::try_new(0).unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn new_panics_on_zero_capacity() {
        let _ = LruCache::<u64, u64>::new(0);
    }

    #[test]
    fn pop_lru_returns_entries_oldest_first() {
        let mut cache = LruCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.insert(3, "three");
        cache.touch(&1);

        assert_eq!(cache.pop_lru(), Some((2, "two")));
        assert_eq!(cache.pop_lru(), Some((3, "three")));
        assert_eq!(cache.pop_lru(), Some((1, "one")));
        assert_eq!(cache.pop_lru(), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn peek_lru_matches_next_eviction() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.peek_lru(), Some((&1, &10)));

        cache.touch(&1);
        assert_eq!(cache.peek_lru(), Some((&2, &20)));
    }

    #[test]
    fn touch_missing_key_returns_false() {
        let mut cache: LruCache<u64, u64> = LruCache::new(2);
        assert!(!cache.touch(&1));
    }

    #[test]
    fn recency_rank_orders_from_most_recent() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(3, 30);

        assert_eq!(cache.recency_rank(&3), Some(0));
        assert_eq!(cache.recency_rank(&2), Some(1));
        assert_eq!(cache.recency_rank(&1), Some(2));
        assert_eq!(cache.recency_rank(&99), None);

        cache.get(&1);
        assert_eq!(cache.recency_rank(&1), Some(0));
    }

    #[test]
    fn remove_frees_space_without_eviction() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.remove(&1), Some(10));
        assert_eq!(cache.remove(&1), None);

        cache.insert(3, 30);
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn clear_resets_state() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);

        cache.insert(3, 30);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn extend_inserts_in_order() {
        let mut cache = LruCache::new(2);
        cache.extend(vec![(1, 10), (2, 20), (3, 30)]);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn eviction_churn_preserves_invariants() {
        let mut cache = LruCache::new(8);
        for i in 0..1000u64 {
            cache.insert(i, i);
            if i % 3 == 0 {
                cache.get(&(i / 2));
            }
            if i % 7 == 0 {
                cache.remove(&(i / 3));
            }
        }
        assert!(cache.len() <= 8);
        cache.check_invariants().unwrap();
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_snapshot_counts_operations() {
        use crate::metrics::traits::MetricsSnapshotProvider;

        let mut cache = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(3, 30);
        cache.get(&1);
        cache.get(&3);

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.insert_calls, 3);
        assert_eq!(snapshot.insert_new, 3);
        assert_eq!(snapshot.evicted_entries, 1);
        assert_eq!(snapshot.get_calls, 2);
        assert_eq!(snapshot.get_misses, 1);
        assert_eq!(snapshot.get_hits, 1);
        assert_eq!(snapshot.cache_len, 2);
        assert_eq!(snapshot.capacity, 2);
    }

    #[cfg(feature = "concurrency")]
    mod concurrent {
        use super::*;

        #[test]
        fn concurrent_cache_basic_ops() {
            let cache: ConcurrentLruCache<u64, String> = ConcurrentLruCache::new(2);
            cache.insert(1, "one".to_string());
            cache.insert(2, "two".to_string());

            assert_eq!(cache.get(&1), Some("one".to_string()));
            cache.insert(3, "three".to_string());

            assert!(!cache.contains(&2));
            assert!(cache.contains(&1));
            assert_eq!(cache.len(), 2);
        }

        #[test]
        fn concurrent_cache_shared_across_threads() {
            let cache: ConcurrentLruCache<u64, u64> = ConcurrentLruCache::new(128);
            let mut handles = Vec::new();
            for t in 0..4u64 {
                let cache = cache.clone();
                handles.push(std::thread::spawn(move || {
                    for i in 0..32u64 {
                        cache.insert(t * 32 + i, i);
                    }
                }));
            }
            for handle in handles {
                handle.join().unwrap();
            }
            assert_eq!(cache.len(), 128);
        }
    }
}
