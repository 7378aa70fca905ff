use balance_chart::ChartError;
use balance_chart::api::{BalanceChart, BalanceChartConfig};
use balance_chart::core::{DegenerateReason, SampleSeries, Viewport, YAxisTicks};
use balance_chart::interaction::ChartEvent;
use balance_chart::render::{CanvasLayerKind, NullRenderer};

fn chart_with(samples: Vec<f64>, ticks: Vec<f64>, viewport: Viewport) -> BalanceChart<NullRenderer> {
    let config = BalanceChartConfig::new(
        viewport,
        SampleSeries::new(samples).expect("samples"),
        YAxisTicks::new(ticks).expect("ticks"),
    );
    BalanceChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn single_sample_renders_placeholder_only() {
    let mut chart = chart_with(vec![120.0], vec![0.0, 500.0], Viewport::new(360, 240));

    assert_eq!(
        chart.degenerate_reason(),
        Some(DegenerateReason::TooFewSamples { count: 1 })
    );
    assert_eq!(chart.selected_index(), None);

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.curves().count(), 0);
    assert_eq!(frame.circles().count(), 0);
    assert_eq!(frame.lines().count(), 0);
    let texts: Vec<_> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["No data"]);
    assert_eq!(
        frame.layer(CanvasLayerKind::Background).expect("background").rects.len(),
        1
    );

    chart.render().expect("placeholder still renders");
}

#[test]
fn empty_series_is_degenerate() {
    let chart = chart_with(Vec::new(), vec![0.0, 500.0], Viewport::new(360, 240));

    assert_eq!(
        chart.degenerate_reason(),
        Some(DegenerateReason::TooFewSamples { count: 0 })
    );
    assert_eq!(chart.selected_value(), None);
}

#[test]
fn non_positive_ceiling_is_degenerate() {
    let zero = chart_with(vec![1.0, 2.0, 3.0], vec![0.0], Viewport::new(360, 240));
    assert!(matches!(
        zero.degenerate_reason(),
        Some(DegenerateReason::NonPositiveCeiling { .. })
    ));

    let negative = chart_with(vec![1.0, 2.0], vec![-10.0, -5.0], Viewport::new(360, 240));
    assert!(negative.is_degenerate());
}

#[test]
fn overflowing_projection_falls_back_to_placeholder() {
    let mut chart = chart_with(vec![0.0, 1e308], vec![0.0, 1e-10], Viewport::new(360, 240));

    assert!(matches!(
        chart.degenerate_reason(),
        Some(DegenerateReason::UnprojectableValue { .. })
    ));
    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.curves().count(), 0);
    let texts: Vec<_> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["No data"]);
    chart.render().expect("placeholder renders");
}

#[test]
fn events_are_ignored_while_degenerate() {
    let mut chart = chart_with(vec![42.0], vec![0.0, 100.0], Viewport::new(360, 240));

    assert!(!chart.dispatch(ChartEvent::PointerMove { x: 10.0 }));
    assert!(!chart.on_label_tap(0));
    assert_eq!(chart.scrubber_x(), None);
}

#[test]
fn tiny_viewport_recovers_after_resize() {
    let mut chart = chart_with(
        vec![100.0, 300.0, 250.0],
        vec![0.0, 500.0],
        Viewport::new(40, 40),
    );
    assert!(matches!(
        chart.degenerate_reason(),
        Some(DegenerateReason::EmptyPlotArea { .. })
    ));

    chart.set_viewport(Viewport::new(360, 240)).expect("resize");

    assert!(!chart.is_degenerate());
    assert_eq!(chart.selected_index(), Some(1));
}

#[test]
fn zero_viewport_is_a_construction_error() {
    let config = BalanceChartConfig::dashboard(Viewport::new(0, 240)).expect("config");
    let err = BalanceChart::new(NullRenderer::default(), config)
        .err()
        .expect("zero width must fail");

    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn non_finite_samples_are_rejected() {
    let err = SampleSeries::new(vec![1.0, f64::NAN]).expect_err("nan sample");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn unordered_ticks_are_rejected() {
    assert!(YAxisTicks::new(vec![0.0, 300.0, 200.0]).is_err());
    assert!(YAxisTicks::new(Vec::new()).is_err());
}
