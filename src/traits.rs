//! # Cache Trait Hierarchy
//!
//! Trait seams for the cache side of the crate, so callers can accept "any
//! cache" without naming a concrete policy type.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │  remove(&K) → Option<V>                 │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │  pop_lru() → (K, V)                     │
//!   │  peek_lru() → (&K, &V)                  │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → usize               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! - Implementations are **NOT thread-safe** by default.
//! - [`ConcurrentCache`] is a marker for wrappers that provide their own
//!   synchronization (e.g. `ConcurrentLruCache`).

/// Core cache operations that all caches support.
///
/// # Example
///
/// ```
/// use clusterkit::traits::CoreCache;
/// use clusterkit::policy::lru::LruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity, an entry may be evicted according to the
    /// cache's eviction policy before the new entry is inserted.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// Takes `&mut self` because policies update access bookkeeping on hits.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if the key is present, without touching access order.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Recency-ordered caches (least-recently-used eviction).
///
/// # Example
///
/// ```
/// use clusterkit::traits::{CoreCache, LruCacheTrait};
/// use clusterkit::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.insert(1, "one");
/// cache.insert(2, "two");
///
/// // Key 1 is the least recently used.
/// assert_eq!(cache.peek_lru(), Some((&1, &"one")));
///
/// // Touching bumps it to most recent without reading the value.
/// assert!(cache.touch(&1));
/// assert_eq!(cache.peek_lru(), Some((&2, &"two")));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without removing it or
    /// affecting recency order.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks a key as most recently used without retrieving its value.
    ///
    /// Returns `false` if the key is not present.
    fn touch(&mut self, key: &K) -> bool;

    /// Returns the recency position of a key: 0 is most recent.
    ///
    /// O(n) scan; intended for tests and diagnostics.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker for cache wrappers that are safe to share across threads.
pub trait ConcurrentCache: Send + Sync {}
