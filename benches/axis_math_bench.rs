use chart_axes::core::{nice_domain_and_ticks, resolve_tick_precision, LinearScale};
use chart_axes::{align_dual_axes, build_quant_axis, build_time_axis, YAxisSide};
use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_nice_domain_and_ticks(c: &mut Criterion) {
    c.bench_function("nice_domain_and_ticks", |b| {
        b.iter(|| {
            let _ = nice_domain_and_ticks(black_box(-3.217), black_box(17.94), black_box(7))
                .expect("finite domain");
        })
    });
}

fn bench_quant_axis_10k_column(c: &mut Criterion) {
    let column: Vec<f64> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.017).sin() * 40.0 + t * 0.003
        })
        .collect();

    c.bench_function("quant_axis_10k_column", |b| {
        b.iter(|| {
            let _ = build_quant_axis(
                black_box(&column),
                black_box(480.0),
                YAxisSide::Left,
                None,
            )
            .expect("valid axis");
        })
    });
}

fn bench_dual_axis_alignment(c: &mut Criterion) {
    let left_column: Vec<f64> = (0..500).map(|i| 3.0 + (i as f64 * 0.11).sin() * 4.2).collect();
    let right_column: Vec<f64> = (0..500)
        .map(|i| 14_000.0 + i as f64 * 5.3 + (i as f64 * 0.07).cos() * 310.0)
        .collect();
    let left = build_quant_axis(&left_column, 400.0, YAxisSide::Left, None).expect("left axis");
    let right = build_quant_axis(&right_column, 400.0, YAxisSide::Right, None).expect("right axis");

    c.bench_function("dual_axis_alignment", |b| {
        b.iter(|| {
            let _ = align_dual_axes(black_box(&left), black_box(&right)).expect("aligned");
        })
    });
}

fn bench_time_axis_daily_decade(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid ymd");
    let dates: Vec<NaiveDate> = (0..3_650)
        .map(|i| start + chrono::Days::new(i))
        .collect();

    c.bench_function("time_axis_daily_decade", |b| {
        b.iter(|| {
            let _ = build_time_axis(black_box(&dates), None).expect("valid axis");
        })
    });
}

fn bench_precision_and_scale_round_trip(c: &mut Criterion) {
    let (_, tick_values) = nice_domain_and_ticks(0.0, 9.73, 8).expect("finite domain");
    let scale = LinearScale::new((0.0, 10.0), (480.0, 0.0)).expect("valid scale");

    c.bench_function("precision_and_scale_round_trip", |b| {
        b.iter(|| {
            let precision = resolve_tick_precision(black_box(&tick_values)).expect("valid ticks");
            let px = scale.position(black_box(4.321));
            let _ = (precision, scale.invert(px));
        })
    });
}

criterion_group!(
    benches,
    bench_nice_domain_and_ticks,
    bench_quant_axis_10k_column,
    bench_dual_axis_alignment,
    bench_time_axis_daily_decade,
    bench_precision_and_scale_round_trip
);
criterion_main!(benches);
