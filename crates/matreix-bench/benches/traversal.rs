//! Criterion micro-benchmarks comparing row-major and column-major summation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matreix::TraversalOrder;
use matreix_bench::{build_matrix, reference_profile, small_profile};

/// Benchmark: sum the 65535x255 reference matrix in each order.
fn bench_traversals_reference(c: &mut Criterion) {
    let matrix = build_matrix(&reference_profile(42)).unwrap();

    let mut group = c.benchmark_group("traversals");
    group.sample_size(20);
    for order in TraversalOrder::ALL {
        group.bench_function(order.name(), |b| {
            b.iter(|| black_box(matrix.sum(black_box(order))));
        });
    }
    group.finish();
}

/// Benchmark: the same pair on a 64x64 matrix that fits in L1.
fn bench_traversals_small(c: &mut Criterion) {
    let matrix = build_matrix(&small_profile(42)).unwrap();

    let mut group = c.benchmark_group("traversals_small");
    for order in TraversalOrder::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(order.name()), &order, |b, &o| {
            b.iter(|| black_box(matrix.sum(o)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversals_reference, bench_traversals_small);
criterion_main!(benches);
