use approx::assert_relative_eq;
use balance_chart::api::{BalanceChart, BalanceChartConfig};
use balance_chart::core::{SampleSeries, Viewport, YAxisTicks};
use balance_chart::interaction::{ChartEvent, Scrubber};
use balance_chart::render::NullRenderer;

// 548x280 with default insets leaves a 500x200 plot: spacing 100, x_i = 100 i + 50.
fn dashboard_chart() -> BalanceChart<NullRenderer> {
    let config = BalanceChartConfig::dashboard(Viewport::new(548, 280)).expect("dashboard config");
    BalanceChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn fresh_chart_selects_peak_without_scrubber() {
    let chart = dashboard_chart();

    assert_eq!(chart.selected_index(), Some(3));
    assert_eq!(chart.selected_value(), Some(409.0));
    assert_eq!(chart.scrubber_x(), None);
}

#[test]
fn peak_ties_resolve_to_first_occurrence() {
    let config = BalanceChartConfig::new(
        Viewport::new(548, 280),
        SampleSeries::new(vec![5.0, 9.0, 9.0, 1.0]).expect("samples"),
        YAxisTicks::new(vec![0.0, 10.0]).expect("ticks"),
    );
    let chart = BalanceChart::new(NullRenderer::default(), config).expect("chart init");

    assert_eq!(chart.selected_index(), Some(1));
}

#[test]
fn configured_initial_selection_overrides_peak() {
    let config = BalanceChartConfig::dashboard(Viewport::new(548, 280))
        .expect("dashboard config")
        .with_initial_selection(42);
    let chart = BalanceChart::new(NullRenderer::default(), config).expect("chart init");

    assert_eq!(chart.selected_index(), Some(5));
}

#[test]
fn pointer_move_selects_nearest_sample_and_keeps_raw_scrubber() {
    let mut chart = dashboard_chart();

    assert!(chart.on_viewport_pointer_move(32.0 + 262.0));
    assert_eq!(chart.selected_index(), Some(2));
    assert_eq!(chart.selected_value(), Some(250.0));
    assert_relative_eq!(chart.scrubber_x().expect("scrubber"), 262.0);
}

#[test]
fn pointer_outside_plot_clamps_to_edge_samples() {
    let mut chart = dashboard_chart();

    chart.on_pointer_move(-1_000.0);
    assert_eq!(chart.selected_index(), Some(0));

    chart.on_pointer_move(10_000.0);
    assert_eq!(chart.selected_index(), Some(5));
}

#[test]
fn label_tap_snaps_scrubber_to_sample_x() {
    let mut chart = dashboard_chart();

    assert!(chart.on_label_tap(4));
    assert_eq!(chart.selected_index(), Some(4));
    assert_relative_eq!(chart.scrubber_x().expect("scrubber"), 450.0);
    assert_eq!(
        chart.selection().and_then(|state| state.scrubber()),
        Some(Scrubber::Snapped { index: 4 })
    );
}

#[test]
fn out_of_range_label_tap_clamps_to_last_sample() {
    let mut chart = dashboard_chart();

    chart.on_label_tap(99);
    assert_eq!(chart.selected_index(), Some(5));
    // The last sample sits half a spacing past the plot's right edge.
    assert_relative_eq!(chart.scrubber_x().expect("scrubber"), 550.0);
}

#[test]
fn repeated_event_reports_no_change() {
    let mut chart = dashboard_chart();

    assert!(chart.dispatch(ChartEvent::LabelTap { index: 1 }));
    assert!(!chart.dispatch(ChartEvent::LabelTap { index: 1 }));
}

#[test]
fn press_on_label_cell_is_a_label_tap() {
    let mut chart = dashboard_chart();
    let row = chart.label_row();
    let x = row.cell_center_x(1, 6);
    let y = row.top + row.height / 2.0;

    assert_eq!(chart.label_index_at(x, y), Some(1));
    assert!(chart.on_viewport_press(x, y));
    assert_eq!(chart.selected_index(), Some(1));
    assert_relative_eq!(chart.scrubber_x().expect("scrubber"), 150.0);
}

#[test]
fn press_above_label_row_moves_pointer() {
    let mut chart = dashboard_chart();

    assert!(chart.on_viewport_press(32.0 + 50.0, 100.0));
    assert_eq!(chart.selected_index(), Some(0));
    assert_eq!(
        chart.selection().and_then(|state| state.scrubber()),
        Some(Scrubber::Pointer { x: 50.0 })
    );
}

#[test]
fn press_in_label_row_padding_is_ignored() {
    let mut chart = dashboard_chart();
    let row = chart.label_row();

    assert!(!chart.on_viewport_press(4.0, row.top + 4.0));
    assert_eq!(chart.selected_index(), Some(3));
    assert_eq!(chart.scrubber_x(), None);
}

#[test]
fn resize_keeps_selection_and_moves_snapped_scrubber() {
    let mut chart = dashboard_chart();
    chart.on_label_tap(4);

    chart
        .set_viewport(Viewport::new(1_048, 280))
        .expect("resize");

    let geometry = chart.geometry().expect("geometry");
    assert_relative_eq!(geometry.spacing(), 200.0);
    assert_eq!(chart.selected_index(), Some(4));
    assert_relative_eq!(chart.scrubber_x().expect("scrubber"), 900.0);
}

#[test]
fn resize_resnaps_pointer_selection_to_scrubber() {
    let mut chart = dashboard_chart();
    chart.on_pointer_move(550.0);
    assert_eq!(chart.selected_index(), Some(5));

    chart
        .set_viewport(Viewport::new(2_048, 280))
        .expect("resize");

    let geometry = chart.geometry().expect("geometry");
    let scrubber = chart.scrubber_x().expect("scrubber");
    assert_relative_eq!(geometry.spacing(), 400.0);
    assert_relative_eq!(scrubber, 550.0);
    assert_eq!(chart.selected_index(), Some(geometry.x_to_index(scrubber)));
    assert_eq!(chart.selected_index(), Some(1));
}

#[test]
fn initial_selection_reports_configured_start() {
    assert_eq!(dashboard_chart().initial_selection(), Some(3));

    let config = BalanceChartConfig::dashboard(Viewport::new(548, 280))
        .expect("dashboard config")
        .with_initial_selection(42);
    let chart = BalanceChart::new(NullRenderer::default(), config).expect("chart init");
    assert_eq!(chart.initial_selection(), chart.selected_index());
    assert_eq!(chart.initial_selection(), Some(5));
}

#[test]
fn zero_viewport_resize_is_rejected() {
    let mut chart = dashboard_chart();

    assert!(chart.set_viewport(Viewport::new(0, 280)).is_err());
    assert_eq!(chart.viewport(), Viewport::new(548, 280));
}
