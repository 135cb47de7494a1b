//! Benchmarks for the duration kernel.
//!
//! Run with: cargo bench -p gilt-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal_macros::dec;

use gilt_analytics::prelude::*;
use gilt_core::Instrument;

fn bench_macaulay(c: &mut Criterion) {
    let mut group = c.benchmark_group("macaulay_duration");

    for maturity in [5_u32, 10, 30, 100] {
        group.bench_with_input(
            BenchmarkId::new("scalar", maturity),
            &maturity,
            |b, &maturity| {
                b.iter(|| {
                    macaulay_duration(
                        black_box(1_000_000.0),
                        black_box(0.05),
                        black_box(0.052),
                        black_box(maturity),
                    )
                });
            },
        );

        let bond = Instrument::new(dec!(1_000_000), dec!(0.05), 0.052, maturity);
        group.bench_with_input(
            BenchmarkId::new("instrument", maturity),
            &bond,
            |b, bond| b.iter(|| instrument_duration(black_box(bond))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_macaulay);
criterion_main!(benches);
