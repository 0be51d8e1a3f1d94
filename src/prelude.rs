pub use crate::crdt::{Convergent, GCounter, PNCounter};
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::lru::LruCache;
pub use crate::ring::HashRing;
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentLruCache;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{LruMetricsSnapshot, RingMetricsSnapshot};
