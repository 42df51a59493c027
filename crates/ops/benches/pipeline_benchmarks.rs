use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::{Arc, Mutex};

use ripple_core::{Observable, Observer};
use ripple_ops::ObservableExt;

/// Naive baseline: the same transform/filter applied in a plain loop,
/// to show what the subscription indirection costs per element.
fn naive_pipeline(values: &[u64]) -> u64 {
    let mut sum = 0u64;
    for v in values {
        let v = v.wrapping_mul(31);
        if v % 3 != 0 {
            sum = sum.wrapping_add(v);
        }
    }
    sum
}

struct SummingObserver {
    sum: Mutex<u64>,
}

impl Observer<u64> for SummingObserver {
    fn on_next(&self, item: u64) {
        let mut sum = self.sum.lock().unwrap();
        *sum = sum.wrapping_add(item);
    }
}

fn composed_pipeline(source: &Observable<u64>) -> u64 {
    let observer = Arc::new(SummingObserver { sum: Mutex::new(0) });
    source
        .map(|v: u64| v.wrapping_mul(31))
        .filter(|v: &u64| v % 3 != 0)
        .subscribe(observer.clone());
    let sum = *observer.sum.lock().unwrap();
    sum
}

fn bench_synchronous_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("synchronous_pipeline");

    for size in [100usize, 1_000, 10_000] {
        let values: Vec<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("naive_loop", size), &values, |b, values| {
            b.iter(|| naive_pipeline(black_box(values)));
        });

        let source = Observable::from_iter(values.clone());
        group.bench_with_input(
            BenchmarkId::new("map_filter_subscribe", size),
            &source,
            |b, source| {
                b.iter(|| composed_pipeline(black_box(source)));
            },
        );
    }

    group.finish();
}

fn bench_subscription_setup(c: &mut Criterion) {
    let values: Vec<u64> = (0..16u64).collect();

    c.bench_function("build_four_stage_pipeline", |b| {
        let source = Observable::from_iter(values.clone());
        b.iter(|| {
            let pipeline = source
                .map(|v: u64| v.wrapping_add(1))
                .filter(|v: &u64| v % 2 == 0)
                .map(|v: u64| v.wrapping_mul(2));
            black_box(pipeline)
        });
    });
}

criterion_group!(
    benches,
    bench_synchronous_pipeline,
    bench_subscription_setup
);
criterion_main!(benches);
