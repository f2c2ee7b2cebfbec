use criterion::{criterion_group, criterion_main, Criterion};
use seqpipe::prelude::*;
use seqpipe::SegmentPool;

fn make_data(len: usize) -> Vec<i64> {
    (0..len).map(|i| (i % 100) as i64).collect()
}

fn bench_fused_pipeline(c: &mut Criterion) {
    let data = make_data(1024);
    c.bench_function("fused_filter_map_sum", |b| {
        b.iter(|| {
            seqpipe::from_slice(&data)
                .filter(|x: &i64| x % 3 == 0)
                .map(|x| x * 2)
                .sum::<i64>()
        })
    });
}

fn bench_pooled_materialize(c: &mut Criterion) {
    let data = make_data(4096);
    let pool = SegmentPool::new();
    c.bench_function("pooled_to_vec", |b| {
        b.iter(|| {
            let out = seqpipe::from_slice(&data)
                .filter(|x: &i64| x % 2 == 0)
                .to_vec_in(&pool)
                .unwrap();
            out.len()
        })
    });
}

criterion_group!(pipelines, bench_fused_pipeline, bench_pooled_materialize);
criterion_main!(pipelines);
