//! Reducer and dispatch benchmarks.
//!
//! Measures command application at different tab-list sizes:
//! - Tab counts: 10, 50, 200
//!
//! Run with: cargo bench --bench reducer
//! Results saved to: target/criterion/

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tab_router::{Command, Tab, TabListState, TabRouter, reduce};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const TAB_COUNTS: &[usize] = &[10, 50, 200];

fn state_with(count: usize) -> TabListState {
    let tabs = (0..count).map(|i| Tab::new(format!("/tab/{i}"))).collect();
    TabListState::new(tabs, 0).expect("generated paths are unique")
}

// ============================================================================
// Benchmark: Pure Reducer
// ============================================================================

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for &count in TAB_COUNTS {
        let state = state_with(count);
        let last = format!("/tab/{}", count - 1);

        group.bench_with_input(BenchmarkId::new("open_existing", count), &state, |b, s| {
            b.iter(|| {
                let tab = Tab::new(last.clone()).with_param("x", 1);
                reduce(black_box(s), Command::open(tab))
            });
        });

        group.bench_with_input(BenchmarkId::new("switch_to_last", count), &state, |b, s| {
            b.iter(|| reduce(black_box(s), Command::switch_to(last.clone())));
        });

        group.bench_with_input(BenchmarkId::new("reorder", count), &state, |b, s| {
            b.iter(|| reduce(black_box(s), Command::reorder(0, count - 1)));
        });

        group.bench_with_input(BenchmarkId::new("close_missing", count), &state, |b, s| {
            b.iter(|| reduce(black_box(s), Command::close("/missing")));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Dispatch with Persistence
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for &count in TAB_COUNTS {
        let router = TabRouter::builder().build().expect("default options are valid");
        for i in 0..count {
            router.push(format!("/tab/{i}"));
        }

        group.bench_with_input(BenchmarkId::new("switch_and_persist", count), &router, |b, r| {
            let mut i = 0usize;
            b.iter(|| {
                i = (i + 1) % count;
                r.switch_to_path(&format!("/tab/{i}"));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_dispatch);
criterion_main!(benches);
