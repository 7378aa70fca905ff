use balance_chart::api::{BalanceChart, BalanceChartConfig};
use balance_chart::core::{
    PlotArea, PlotInsets, SampleSeries, SeriesGeometry, Viewport, YAxisTicks,
    project_smooth_curve,
};
use balance_chart::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wave_series(count: usize) -> SampleSeries {
    let values = (0..count)
        .map(|i| {
            let t = i as f64;
            250.0 + (t / 9.0).sin() * 120.0 + (t / 31.0).cos() * 60.0
        })
        .collect();
    SampleSeries::new(values).expect("valid generated series")
}

fn bench_pointer_to_index(c: &mut Criterion) {
    let geometry = SeriesGeometry::new(1_280.0, 640.0, 1_000, 500.0).expect("valid geometry");

    c.bench_function("pointer_to_index_round_trip", |b| {
        b.iter(|| {
            let index = geometry.x_to_index(black_box(733.25));
            let _ = geometry.index_to_x(index);
        })
    });
}

fn bench_curve_projection_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1_920, 1_080);
    let area = PlotArea::from_viewport(viewport, PlotInsets::default());
    let series = wave_series(10_000);
    let ticks = YAxisTicks::new(vec![0.0, 250.0, 500.0]).expect("valid ticks");
    let geometry = SeriesGeometry::for_series(area, &series, &ticks).expect("valid geometry");

    c.bench_function("curve_projection_10k", |b| {
        b.iter(|| {
            let points = geometry.project(black_box(&series));
            let _ = project_smooth_curve(black_box(&points));
        })
    });
}

fn bench_dashboard_frame_build(c: &mut Criterion) {
    let config = BalanceChartConfig::dashboard(Viewport::new(360, 240)).expect("dashboard config");
    let mut chart = BalanceChart::new(NullRenderer::default(), config).expect("chart init");
    chart.on_pointer_move(120.0);

    c.bench_function("dashboard_frame_build", |b| {
        b.iter(|| {
            let _ = black_box(&chart)
                .build_render_frame()
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_pointer_to_index,
    bench_curve_projection_10k,
    bench_dashboard_frame_build
);
criterion_main!(benches);
