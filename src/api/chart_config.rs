use serde::{Deserialize, Serialize};

use crate::core::{AxisLabels, PlotInsets, SampleSeries, Viewport, YAxisTicks};
use crate::error::{ChartError, ChartResult};

/// Balance samples shown on the home screen, oldest first.
pub const DASHBOARD_SAMPLES: [f64; 6] = [100.0, 300.0, 250.0, 409.0, 300.0, 150.0];
/// Gridline values of the home-screen chart; the last one is the ceiling.
pub const DASHBOARD_Y_TICKS: [f64; 6] = [0.0, 100.0, 200.0, 300.0, 400.0, 500.0];
/// Range labels by 1-based position.
pub const DASHBOARD_RANGE_LABELS: [(usize, &str); 6] = [
    (1, "1D"),
    (2, "5D"),
    (3, "1M"),
    (4, "3M"),
    (5, "6M"),
    (6, "1Y"),
];

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can persist/load a chart setup. Samples, ticks and
/// labels are validated while deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChartConfig {
    pub viewport: Viewport,
    pub samples: SampleSeries,
    pub y_axis_ticks: YAxisTicks,
    #[serde(default)]
    pub axis_labels: AxisLabels,
    #[serde(default)]
    pub insets: PlotInsets,
    /// Overrides the peak-value default selection.
    #[serde(default)]
    pub initial_selection: Option<usize>,
}

impl BalanceChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, samples: SampleSeries, y_axis_ticks: YAxisTicks) -> Self {
        Self {
            viewport,
            samples,
            y_axis_ticks,
            axis_labels: AxisLabels::default(),
            insets: PlotInsets::default(),
            initial_selection: None,
        }
    }

    /// The fixed home-screen chart: six balance samples, ticks 0..=500 and
    /// range labels `1D` through `1Y`.
    pub fn dashboard(viewport: Viewport) -> ChartResult<Self> {
        let samples = SampleSeries::new(DASHBOARD_SAMPLES.to_vec())?;
        let ticks = YAxisTicks::new(DASHBOARD_Y_TICKS.to_vec())?;
        let labels = AxisLabels::from_one_based(DASHBOARD_RANGE_LABELS)?;
        Ok(Self::new(viewport, samples, ticks).with_axis_labels(labels))
    }

    #[must_use]
    pub fn with_axis_labels(mut self, axis_labels: AxisLabels) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_initial_selection(mut self, index: usize) -> Self {
        self.initial_selection = Some(index);
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })
    }
}
