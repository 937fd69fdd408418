use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use sortkit::prelude::*;
use std::hint::black_box;

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random i64");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 10_000;
    let random: Vec<i64> = (0..count)
        .map(|_| rng.random_range(i64::MIN..i64::MAX))
        .collect();

    for method in [
        SortingMethod::Shell,
        SortingMethod::Heapsort,
        SortingMethod::Quicksort,
        SortingMethod::System,
    ] {
        let sorter = AnySorter::new(method);
        group.bench_function(method.name(), |b| {
            b.iter_batched(
                || random.clone(),
                |mut data| sorter.sort(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    // Std baseline
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("Presorted and Reversed");
    group.sample_size(20);

    let count = 10_000i64;
    let sorted: Vec<i64> = (0..count).collect();
    let reversed: Vec<i64> = (0..count).rev().collect();

    for method in [
        SortingMethod::Shell,
        SortingMethod::Heapsort,
        SortingMethod::Quicksort,
        SortingMethod::System,
    ] {
        let sorter = AnySorter::new(method);
        group.bench_function(format!("{} sorted", method.name()), |b| {
            b.iter_batched(
                || sorted.clone(),
                |mut data| sorter.sort(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("{} reversed", method.name()), |b| {
            b.iter_batched(
                || reversed.clone(),
                |mut data| sorter.sort(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_with_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index Tracking");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 10_000;
    let random: Vec<i64> = (0..count)
        .map(|_| rng.random_range(i64::MIN..i64::MAX))
        .collect();

    for method in [SortingMethod::Quicksort, SortingMethod::System] {
        let sorter = AnySorter::new(method);
        group.bench_function(method.name(), |b| {
            b.iter_batched(
                || random.clone(),
                |mut data| sorter.sort_with_indices(black_box(&mut data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Selection");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 10_000;
    let random: Vec<i64> = (0..count)
        .map(|_| rng.random_range(-1_000_000..1_000_000))
        .collect();
    let sorter = AnySorter::default();

    group.bench_function("median via quickselect", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| sorter.median(black_box(&mut data)).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("median via full sort", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| {
                data.sort_unstable();
                (data[count / 2 - 1] + data[count / 2]) / 2
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_methods,
    bench_presorted,
    bench_with_indices,
    bench_selection
);
criterion_main!(benches);
