use balance_chart::api::{BalanceChart, BalanceChartConfig};
use balance_chart::core::{SeriesGeometry, Viewport};
use balance_chart::interaction::ChartEvent;
use balance_chart::render::NullRenderer;
use proptest::prelude::*;

fn chart_event() -> impl Strategy<Value = ChartEvent> {
    prop_oneof![
        (-5_000.0f64..5_000.0).prop_map(|x| ChartEvent::PointerMove { x }),
        (0usize..32).prop_map(|index| ChartEvent::LabelTap { index }),
    ]
}

proptest! {
    #[test]
    fn pointer_index_stays_in_bounds(
        sample_count in 2usize..400,
        width in 1.0f64..4_000.0,
        x in -1.0e7f64..1.0e7
    ) {
        let geometry = SeriesGeometry::new(width, 300.0, sample_count, 500.0)
            .expect("valid geometry");

        prop_assert!(geometry.x_to_index(x) < sample_count);
    }

    #[test]
    fn sample_x_maps_back_to_its_index(
        sample_count in 2usize..400,
        width in 1.0f64..4_000.0,
        index_factor in 0.0f64..1.0
    ) {
        let geometry = SeriesGeometry::new(width, 300.0, sample_count, 500.0)
            .expect("valid geometry");
        let index = ((sample_count - 1) as f64 * index_factor).round() as usize;

        prop_assert_eq!(geometry.x_to_index(geometry.index_to_x(index)), index);
    }

    #[test]
    fn value_projection_spans_plot_height(
        height in 1.0f64..2_000.0,
        max_y in 0.001f64..1.0e6,
        value_factor in 0.0f64..1.0
    ) {
        let geometry = SeriesGeometry::new(400.0, height, 6, max_y).expect("valid geometry");
        let y = geometry.value_to_y(value_factor * max_y);

        prop_assert!(geometry.value_to_y(max_y).abs() <= 1e-9 * height);
        prop_assert!((geometry.value_to_y(0.0) - height).abs() <= 1e-9 * height);
        prop_assert!(y >= -1e-9 && y <= height + 1e-9);
    }

    #[test]
    fn any_event_sequence_keeps_selection_in_bounds(
        events in proptest::collection::vec(chart_event(), 0..40)
    ) {
        let config = BalanceChartConfig::dashboard(Viewport::new(360, 240))
            .expect("dashboard config");
        let mut chart = BalanceChart::new(NullRenderer::default(), config).expect("chart init");

        for event in events {
            chart.dispatch(event);
            let index = chart.selected_index().expect("selection");
            prop_assert!(index < chart.samples().len());
            prop_assert!(chart.selected_value().is_some());
        }
    }
}
