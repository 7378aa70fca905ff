#![cfg(feature = "cairo-backend")]

use balance_chart::ChartError;
use balance_chart::api::{BalanceChart, BalanceChartConfig};
use balance_chart::core::{SampleSeries, Viewport, YAxisTicks};
use balance_chart::render::CairoRenderer;
use cairo::{Context, Format, ImageSurface};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_dashboard_chart() {
    let renderer = CairoRenderer::new(360, 240).expect("renderer");
    let config = BalanceChartConfig::dashboard(Viewport::new(360, 240)).expect("config");
    let mut chart = BalanceChart::new(renderer, config).expect("chart init");
    chart.on_pointer_move(80.0);

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.curves_drawn, 1);
    assert_eq!(stats.circles_drawn, 2);
    assert_eq!(stats.lines_drawn, 7);
    assert_eq!(stats.texts_drawn, 13);
}

#[test]
fn cairo_renderer_draws_placeholder_for_single_sample() {
    let renderer = CairoRenderer::new(200, 160).expect("renderer");
    let config = BalanceChartConfig::new(
        Viewport::new(200, 160),
        SampleSeries::new(vec![10.0]).expect("samples"),
        YAxisTicks::new(vec![0.0, 50.0]).expect("ticks"),
    );
    let mut chart = BalanceChart::new(renderer, config).expect("chart init");

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.curves_drawn, 0);
    assert_eq!(stats.texts_drawn, 1);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let config = BalanceChartConfig::dashboard(Viewport::new(480, 300)).expect("config");
    let mut chart = BalanceChart::new(renderer, config).expect("chart init");

    let surface = ImageSurface::create(Format::ARgb32, 480, 300).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert_eq!(chart.renderer().last_stats().curves_drawn, 1);
}

#[test]
fn cairo_renderer_writes_png() {
    let renderer = CairoRenderer::new(360, 240).expect("renderer");
    let config = BalanceChartConfig::dashboard(Viewport::new(360, 240)).expect("config");
    let mut chart = BalanceChart::new(renderer, config).expect("chart init");
    chart.render().expect("render");

    let path = std::env::temp_dir().join(format!(
        "balance_chart_render_test_{}.png",
        std::process::id()
    ));
    chart.renderer().write_png(&path).expect("write png");

    let bytes = std::fs::read(&path).expect("read png");
    let _ = std::fs::remove_file(&path);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
