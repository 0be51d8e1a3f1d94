use clusterkit::policy::lru::LruCache;
use clusterkit::traits::{CoreCache, LruCacheTrait};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn bench_lru_insert_get(c: &mut Criterion) {
    c.bench_function("lru_insert_get", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::new(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    cache.insert(black_box(i + 10_000), i);
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::new(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    cache.insert(black_box(10_000 + i), i);
                }
                cache
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_zipf_like_reads(c: &mut Criterion) {
    // Skewed read workload: most gets land on a hot subset of keys.
    c.bench_function("lru_skewed_reads", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::new(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                let mut rng = StdRng::seed_from_u64(42);
                let keys: Vec<u64> = (0..4096)
                    .map(|_| {
                        if rng.gen_range(0..10) < 8 {
                            rng.gen_range(0..64)
                        } else {
                            rng.gen_range(0..2048)
                        }
                    })
                    .collect();
                (cache, keys)
            },
            |(mut cache, keys)| {
                for key in &keys {
                    let _ = black_box(cache.get(black_box(key)));
                }
                cache
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_pop_lru(c: &mut Criterion) {
    c.bench_function("lru_pop_lru", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::new(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                while let Some(entry) = cache.pop_lru() {
                    let _ = black_box(entry);
                }
                cache
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_insert_get,
    bench_lru_eviction_churn,
    bench_lru_zipf_like_reads,
    bench_lru_pop_lru
);
criterion_main!(benches);
