use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use mqsort::prelude::*;
use mqsort::{MergeBuffer, merge_sort_with_buffer};
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Integers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    let mut rng = rand::rng();
    let count = 1_000_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| merge_sort(black_box(&mut data), &Natural).unwrap(),
            BatchSize::LargeInput,
        )
    });

    // Scratch space reserved once, outside the measured loop.
    let mut buf = MergeBuffer::with_capacity(count).unwrap();
    group.bench_function("merge_sort (shared buffer)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| merge_sort_with_buffer(black_box(&mut data), &Natural, &mut buf).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("quick_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| quick_sort(black_box(&mut data), &Natural),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_integers);
criterion_main!(benches);
