//! Benchmarks for the BMI calculation path.
//!
//! These benchmarks measure parsing, classification and result presentation
//! for the inputs a user typically enters.

use bmi_tui::bmi::{classify, evaluate, parse_number, ResultView, UnitSystem};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_parse_number(c: &mut Criterion) {
    c.bench_function("parse_number_decimal", |b| {
        b.iter(|| parse_number(black_box("172.5")))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_metric", |b| {
        b.iter(|| evaluate(UnitSystem::Metric, black_box("170"), "", black_box("65")))
    });

    c.bench_function("evaluate_imperial", |b| {
        b.iter(|| {
            evaluate(
                UnitSystem::Imperial,
                black_box("5"),
                black_box("10"),
                black_box("160"),
            )
        })
    });

    c.bench_function("evaluate_invalid", |b| {
        b.iter(|| evaluate(UnitSystem::Metric, black_box(""), "", black_box("65")))
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_boundaries", |b| {
        b.iter(|| {
            for bmi in [18.4, 18.5, 24.9, 25.0, 29.9, 30.0] {
                black_box(classify(black_box(bmi)));
            }
        })
    });
}

fn bench_present(c: &mut Criterion) {
    let result = evaluate(UnitSystem::Metric, "170", "", "65");

    c.bench_function("present_result", |b| {
        b.iter(|| ResultView::present(black_box(&result)))
    });
}

criterion_group!(
    benches,
    bench_parse_number,
    bench_evaluate,
    bench_classify,
    bench_present
);
criterion_main!(benches);
