// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for flash stack operations.
//!
//! Measures the performance of:
//! - Ticking a stack full of live toasts
//! - The dispatch → store → drain path

use criterion::{criterion_group, criterion_main, Criterion};
use iced_flash::ui::Stack;
use iced_flash::{render, Dispatch, FlashStore, Kind, RenderOptions, ResponseMode};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark ticking a stack with many live controllers.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("flash_stack");

    let t0 = Instant::now();
    let mut stack = Stack::with_max_visible(None);
    for i in 0..100 {
        stack.push(
            render(
                Kind::Info,
                format!("toast {i}").into(),
                RenderOptions::default().duration(60_000),
            ),
            t0,
        );
    }

    group.bench_function("tick_100_live", |b| {
        let mut now = t0;
        b.iter(|| {
            now += Duration::from_millis(16);
            stack.tick(now);
            black_box(&stack);
        });
    });

    group.finish();
}

/// Benchmark the full-page dispatch and store drain path.
fn bench_dispatch_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("flash_stack");

    group.bench_function("dispatch_and_drain", |b| {
        let t0 = Instant::now();
        b.iter(|| {
            let mut store = FlashStore::new();
            Dispatch::success("Saved!")
                .with_success_path("/tasks")
                .dispatch(ResponseMode::FullPage, &mut store);
            store.finish_render();

            let mut stack = Stack::new();
            stack.drain_store(&mut store, t0);
            black_box(&stack);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_dispatch_drain);
criterion_main!(benches);
