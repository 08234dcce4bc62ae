use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_strqueue::{StrQueue, linked_list::queue::locked::LockedStrQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::thread;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| format!("value{}", rng.random_range(0..count * 10)))
        .collect()
}

fn build(values: &[String]) -> StrQueue {
    values.iter().map(String::as_str).collect()
}

// --- Insertion at either end ---

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("tail", size), |b| {
            b.iter(|| {
                let mut queue = StrQueue::new();
                for value in &values {
                    queue.insert_tail(value).unwrap();
                }
                black_box(queue.len())
            })
        });

        group.bench_function(BenchmarkId::new("head", size), |b| {
            b.iter(|| {
                let mut queue = StrQueue::new();
                for value in &values {
                    queue.insert_head(value).unwrap();
                }
                black_box(queue.len())
            })
        });
    }
    group.finish();
}

// --- Whole-chain operations ---

fn reverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for size in SIZES {
        let mut queue = build(&random_values(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                queue.reverse();
                black_box(queue.head().map(str::len))
            })
        });
    }
    group.finish();
}

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("random", size), |b| {
            b.iter_batched(
                || build(&values),
                |mut queue| {
                    queue.sort();
                    queue
                },
                BatchSize::LargeInput,
            )
        });

        let mut sorted = build(&values);
        sorted.sort();
        group.bench_function(BenchmarkId::new("presorted", size), |b| {
            b.iter(|| {
                sorted.sort();
                black_box(sorted.len())
            })
        });
    }
    group.finish();
}

// --- Shared queue under contention ---

fn locked_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("locked");
    let size = 10_000;
    let values = random_values(size);
    group.throughput(Throughput::Elements(size as u64));

    for threads in [1, 2, 4] {
        group.bench_function(BenchmarkId::new("insert_remove", threads), |b| {
            b.iter(|| {
                let queue = LockedStrQueue::new();
                thread::scope(|s| {
                    for chunk in values.chunks(size / threads) {
                        let queue = &queue;
                        s.spawn(move || {
                            let mut buf = [0u8; 16];
                            for value in chunk {
                                queue.insert_tail(value).unwrap();
                                black_box(queue.remove_head(&mut buf).ok());
                            }
                        });
                    }
                });
                black_box(queue.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    insert_benchmark,
    reverse_benchmark,
    sort_benchmark,
    locked_benchmark
);
criterion_main!(benches);
