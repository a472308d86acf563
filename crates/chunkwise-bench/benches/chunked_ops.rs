//! Criterion benchmarks comparing `ChunkedVec` policies against `Vec`.

use std::hint::black_box;

use chunkwise_bench::reference_advisor;
use chunkwise_chunked::{ChunkPolicy, ChunkedVec};
use criterion::{criterion_group, criterion_main, Criterion};

const N: u64 = 100_000;

/// Benchmark: push 100K u64 under each policy, and into a plain Vec.
fn bench_push(c: &mut Criterion) {
    let advisor = reference_advisor();
    c.bench_function("chunked_push_fast_100k", |b| {
        b.iter(|| {
            let mut v = ChunkedVec::with_sizing(&advisor, ChunkPolicy::Fast);
            v.extend(0..N);
            black_box(v.len())
        });
    });
    c.bench_function("chunked_push_bulk_100k", |b| {
        b.iter(|| {
            let mut v = ChunkedVec::with_sizing(
                &advisor,
                ChunkPolicy::Bulk {
                    overcommit_hint: 8192,
                },
            );
            v.extend(0..N);
            black_box(v.len())
        });
    });
    c.bench_function("vec_push_100k", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            v.extend(0..N);
            black_box(v.len())
        });
    });
}

/// Benchmark: sequential indexed reads over 100K elements.
fn bench_get(c: &mut Criterion) {
    let v: ChunkedVec<u64> = (0..N).collect();
    c.bench_function("chunked_get_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..v.len() {
                sum = sum.wrapping_add(v[i]);
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_push, bench_get);
criterion_main!(benches);
