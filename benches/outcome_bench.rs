//! Benchmark for the outcome and maybe composition operators.
//!
//! Measures the success-path cost of chained operators, which should stay
//! allocation-free, against the failure short-circuit path.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use railway::fault::Fault;
use railway::maybe::Maybe;
use railway::outcome::Outcome;
use std::hint::black_box;

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_success_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_success_chain");

    group.bench_function("map_filter_flat_map", |bencher| {
        bencher.iter(|| {
            let outcome = Outcome::succeed(black_box(5))
                .map(|x| x * 2)
                .filter(|x| *x > 0, "must be positive")
                .flat_map(|x| Outcome::succeed(x + 1));
            black_box(outcome)
        });
    });

    for depth in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("map_depth", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut outcome = Outcome::succeed(black_box(1u64));
                for _ in 0..depth {
                    outcome = outcome.map(|x| x.wrapping_add(1));
                }
                black_box(outcome)
            });
        });
    }

    group.finish();
}

fn benchmark_outcome_failure_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_failure_short_circuit");

    group.bench_function("map_chain_on_failure", |bencher| {
        let fault = Fault::new("boom");
        bencher.iter(|| {
            let outcome = Outcome::<u64>::fail(black_box(fault.clone()))
                .map(|x| x + 1)
                .map(|x| x * 2)
                .filter(|x| *x > 0, "unused");
            black_box(outcome)
        });
    });

    group.finish();
}

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_pipeline");

    group.bench_function("map_filter_unwrap_or", |bencher| {
        bencher.iter(|| {
            let value = Maybe::present(black_box("hello"))
                .map(str::len)
                .filter(|len| *len > 3)
                .unwrap_or(0);
            black_box(value)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_outcome_success_chain,
    benchmark_outcome_failure_short_circuit,
    benchmark_maybe_pipeline
);
criterion_main!(benches);
