// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast dispatch under churn.
//!
//! Measures the cost of:
//! - Sustained dispatch with capacity eviction
//! - Duplicate suppression against a full queue
//! - Deadline sweeps over a full queue

use criterion::{criterion_group, criterion_main, Criterion};
use iced_herald::toast::{Manager, Toast};
use std::hint::black_box;
use std::time::Duration;

/// Benchmark sustained dispatch with eviction at capacity.
fn bench_dispatch_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_dispatch");

    group.bench_function("dispatch_1000_unique", |b| {
        b.iter(|| {
            let mut manager = Manager::with_capacity(5);
            for i in 0..1000 {
                manager.dispatch(Toast::info(format!("toast-{i}")));
            }
            black_box(manager.len());
        });
    });

    group.bench_function("dispatch_1000_duplicates", |b| {
        b.iter(|| {
            let mut manager = Manager::with_capacity(5);
            for _ in 0..1000 {
                manager.dispatch(Toast::error("Network down"));
            }
            black_box(manager.len());
        });
    });

    group.finish();
}

/// Benchmark the deadline sweep with a full queue of live entries.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_tick");

    group.bench_function("tick_full_queue", |b| {
        let mut manager = Manager::with_capacity(16);
        for i in 0..16 {
            manager.dispatch(Toast::info(format!("toast-{i}")).duration(Duration::from_secs(3600)));
        }
        b.iter(|| {
            manager.tick();
            black_box(manager.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch_churn, bench_tick);
criterion_main!(benches);
