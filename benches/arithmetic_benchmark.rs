// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Free Functions - Direct calls to each operation
// 2. Error Paths - Rejected operands for divide and square_root
// 3. Operation Dispatch - Evaluating reified Operation values in bulk
// ============================================================================

use calculator::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Free Function Benchmarks
// ============================================================================

fn benchmark_free_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_functions");

    group.bench_function("add", |b| {
        b.iter(|| add(black_box(-5.5), black_box(-10.9)))
    });
    group.bench_function("subtract", |b| {
        b.iter(|| subtract(black_box(-5.5), black_box(-10.9)))
    });
    group.bench_function("multiply", |b| {
        b.iter(|| multiply(black_box(-5.5), black_box(-10.9)))
    });
    group.bench_function("divide", |b| {
        b.iter(|| divide(black_box(-505.5), black_box(-10.5)))
    });
    group.bench_function("square_root", |b| {
        b.iter(|| square_root(black_box(5.0)))
    });

    group.finish();
}

// ============================================================================
// Error Path Benchmarks
// ============================================================================

fn benchmark_error_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_paths");

    group.bench_function("divide_by_zero", |b| {
        b.iter(|| divide(black_box(5.0), black_box(0.0)))
    });
    group.bench_function("square_root_negative", |b| {
        b.iter(|| square_root(black_box(-9.0)))
    });

    group.finish();
}

// ============================================================================
// Operation Dispatch Benchmarks
// ============================================================================

fn benchmark_operation_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("operation_dispatch");

    for num_ops in [10, 100, 1000].iter() {
        let ops: Vec<Operation> = (0..*num_ops)
            .map(|i| {
                let x = i as f64;
                match i % 5 {
                    0 => Operation::Add { a: x, b: 1.5 },
                    1 => Operation::Subtract { a: x, b: 1.5 },
                    2 => Operation::Multiply { a: x, b: 1.5 },
                    3 => Operation::Divide { a: x, b: (i % 7) as f64 },
                    _ => Operation::SquareRoot { n: x - 50.0 },
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(num_ops), &ops, |b, ops| {
            b.iter(|| {
                ops.iter()
                    .map(|op| op.evaluate().unwrap_or(f64::NAN))
                    .filter(|v| !v.is_nan())
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_free_functions,
    benchmark_error_paths,
    benchmark_operation_dispatch
);
criterion_main!(benches);
