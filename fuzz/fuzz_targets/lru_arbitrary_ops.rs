#![no_main]

use clusterkit::policy::lru::LruCache;
use clusterkit::traits::{CoreCache, LruCacheTrait, MutableCache};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LruCache
//
// Tests random sequences of insert, get, peek, contains, remove, touch,
// pop_lru, and clear, asserting the capacity bound and structural
// invariants throughout.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let mut cache: LruCache<u8, u8> = LruCache::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let key = data[idx + 1];

        match op {
            0 => {
                cache.insert(key, key.wrapping_add(1));
                assert!(cache.contains(&key));
            }
            1 => {
                let was_present = cache.contains(&key);
                let got = cache.get(&key).copied();
                assert_eq!(got.is_some(), was_present);
            }
            2 => {
                let was_present = cache.contains(&key);
                assert_eq!(cache.peek(&key).is_some(), was_present);
            }
            3 => {
                let _ = cache.contains(&key);
            }
            4 => {
                let was_present = cache.contains(&key);
                let removed = cache.remove(&key);
                assert_eq!(removed.is_some(), was_present);
                assert!(!cache.contains(&key));
            }
            5 => {
                let was_present = cache.contains(&key);
                assert_eq!(cache.touch(&key), was_present);
                if was_present {
                    assert_eq!(cache.recency_rank(&key), Some(0));
                }
            }
            6 => {
                let old_len = cache.len();
                let popped = cache.pop_lru();
                if popped.is_some() {
                    assert_eq!(cache.len(), old_len - 1);
                } else {
                    assert_eq!(old_len, 0);
                }
            }
            _ => {
                cache.clear();
                assert!(cache.is_empty());
            }
        }

        assert!(cache.len() <= capacity);
        idx += 2;
    }

    cache.check_invariants().unwrap();
});
