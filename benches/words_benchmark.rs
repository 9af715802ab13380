// ============================================================================
// Rupee Words Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Sub-thousand speller - the innermost table lookup
// 2. Full conversion - f64 boundary, grouping and phrase assembly
// 3. Input paths - f64 vs string vs pre-built Amount
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rupee_words::prelude::*;
use std::hint::black_box;

fn benchmark_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("words");

    for n in [7u16, 45, 678, 999].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| black_box(words(black_box(n))));
        });
    }

    group.finish();
}

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_to_words");

    // One value per highest populated scale, plus paise and a huge crore count
    for amount in [0.75, 99.5, 1_500.0, 100_000.0, 12_345_678.0, 123_456_789_012.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(amount), amount, |b, &amount| {
            b.iter(|| black_box(number_to_words(black_box(amount))));
        });
    }

    group.finish();
}

fn benchmark_input_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_paths");
    let converter = NumeralsToWords::default();
    let amount = Amount::from_parts(12_345_678, 90).unwrap();

    group.bench_function("amount", |b| {
        b.iter(|| black_box(converter.convert(black_box(amount))));
    });
    group.bench_function("f64", |b| {
        b.iter(|| black_box(converter.convert_f64(black_box(12_345_678.9))));
    });
    group.bench_function("str", |b| {
        b.iter(|| black_box(converter.convert_str(black_box("1,23,45,678.90"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_words,
    benchmark_conversion,
    benchmark_input_paths
);
criterion_main!(benches);
