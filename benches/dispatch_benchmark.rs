#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for builder dispatch: routing, coercion and assignment.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plot_facade::prelude::*;

fn axes_dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("axes_dispatch");
    let facade = Facade::new(SceneFactory::new());
    let named = named_args! {
        tickSide = Value::constant("OUTWARD"),
        labelVisible = false,
        range = (0.0, 5.0),
        type = Value::constant("LOGARITHMIC"),
    };

    for n in [1, 2, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                facade
                    .axes(black_box(n), black_box(&named))
                    .expect("axes should build")
            });
        });
    }

    group.finish();
}

fn xy_graph_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("xy_graph");
    let facade = Facade::new(SceneFactory::new());
    let named = named_args! { color = (95.0, 207.0, 125.0), symbolVisible = true, name = "series" };

    for size in [100, 10_000] {
        let x: Vec<f64> = (0..size).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| (v * 0.01).sin()).collect();
        let args = [Value::sequence(&x), Value::sequence(&y), Value::from("f")];

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                facade
                    .xy_graph(black_box(&args), black_box(&named))
                    .expect("graph should build")
            });
        });
    }

    group.finish();
}

fn registry_lookup_benchmark(c: &mut Criterion) {
    let registry = PropertyRegistry::global();
    c.bench_function("registry_cached_lookup", |b| {
        b.iter(|| {
            for kind in ElementKind::ALL {
                black_box(registry.properties_of(black_box(kind)).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    axes_dispatch_benchmark,
    xy_graph_benchmark,
    registry_lookup_benchmark
);
criterion_main!(benches);
