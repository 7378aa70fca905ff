use tracing::{debug, warn};

use crate::core::{
    AxisLabels, DegenerateReason, LabelRow, PlotArea, PlotInsets, SampleSeries, SeriesGeometry,
    Viewport, YAxisTicks,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::SelectionState;
use crate::render::Renderer;

use super::render_style::validate_chart_style;
use super::{BalanceChartConfig, ChartStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Balance line chart: geometry, selection state and renderer.
///
/// Samples, ticks and labels are fixed at construction. Selection changes only
/// through [`ChartEvent`](crate::interaction::ChartEvent)s. A series that
/// cannot be laid out (fewer than two samples, non-positive ceiling, empty
/// plot area) keeps the chart alive in a placeholder state.
pub struct BalanceChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) insets: PlotInsets,
    pub(super) samples: SampleSeries,
    pub(super) y_axis_ticks: YAxisTicks,
    pub(super) axis_labels: AxisLabels,
    pub(super) style: ChartStyle,
    pub(super) layout: Result<SeriesGeometry, DegenerateReason>,
    pub(super) selection: Option<SelectionState>,
    initial_index: Option<usize>,
}

impl<R: Renderer> BalanceChart<R> {
    pub fn new(renderer: R, config: BalanceChartConfig) -> ChartResult<Self> {
        let viewport = config.viewport.ensure_valid()?;
        config.insets.validate()?;

        let initial_index = config
            .initial_selection
            .or_else(|| config.samples.peak_index());

        let mut chart = Self {
            renderer,
            viewport,
            insets: config.insets,
            samples: config.samples,
            y_axis_ticks: config.y_axis_ticks,
            axis_labels: config.axis_labels,
            style: ChartStyle::default(),
            layout: Err(DegenerateReason::TooFewSamples { count: 0 }),
            selection: None,
            initial_index,
        };
        chart.relayout();

        debug!(
            sample_count = chart.samples.len(),
            label_count = chart.axis_labels.len(),
            max_y = chart.y_axis_ticks.max(),
            selected = ?chart.selected_index(),
            "balance chart created"
        );
        Ok(chart)
    }

    /// Recomputes geometry for the current viewport. The selection survives;
    /// a pointer-driven one re-snaps to the sample under the scrubber.
    fn relayout(&mut self) {
        let area = self.plot_area();
        self.layout = match SeriesGeometry::for_series(area, &self.samples, &self.y_axis_ticks) {
            Ok(geometry) => Ok(geometry),
            Err(ChartError::Degenerate(reason)) => {
                warn!(%reason, "chart falls back to placeholder");
                Err(reason)
            }
            Err(err) => {
                // Only degenerate layouts are reported by the geometry constructor.
                warn!(error = %err, "unexpected layout error");
                Err(DegenerateReason::EmptyPlotArea {
                    width: area.width,
                    height: area.height,
                })
            }
        };

        if let Ok(geometry) = self.layout {
            self.selection = match self.selection {
                Some(state) => Some(state.relayout(geometry)),
                None => self
                    .initial_index
                    .map(|index| SelectionState::initial(index, geometry)),
            };
        }
    }

    /// Applies a new hosting-layout size; geometry is fully recomputed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.ensure_valid()?;
        if viewport == self.viewport {
            return Ok(());
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "balance chart resized"
        );
        self.viewport = viewport;
        self.relayout();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_viewport(self.viewport, self.insets)
    }

    #[must_use]
    pub fn label_row(&self) -> LabelRow {
        LabelRow::from_viewport(self.viewport, self.insets)
    }

    #[must_use]
    pub fn samples(&self) -> &SampleSeries {
        &self.samples
    }

    #[must_use]
    pub fn y_axis_ticks(&self) -> &YAxisTicks {
        &self.y_axis_ticks
    }

    #[must_use]
    pub fn axis_labels(&self) -> &AxisLabels {
        &self.axis_labels
    }

    /// Current geometry, or `None` while the chart shows a placeholder.
    #[must_use]
    pub fn geometry(&self) -> Option<SeriesGeometry> {
        self.layout.ok()
    }

    #[must_use]
    pub fn degenerate_reason(&self) -> Option<DegenerateReason> {
        self.layout.err()
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.layout.is_err()
    }

    /// The selection a fresh chart starts with: the configured index when
    /// set, else the peak sample. Clamped to the series.
    #[must_use]
    pub fn initial_selection(&self) -> Option<usize> {
        let last = self.samples.len().checked_sub(1)?;
        self.initial_index.map(|index| index.min(last))
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionState> {
        self.selection
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.map(SelectionState::selected_index)
    }

    #[must_use]
    pub fn selected_value(&self) -> Option<f64> {
        self.selected_index()
            .and_then(|index| self.samples.get(index))
    }

    /// Scrubber x in plot-local pixels, if a pointer or tap placed it.
    #[must_use]
    pub fn scrubber_x(&self) -> Option<f64> {
        let geometry = self.geometry()?;
        self.selection?.scrubber_x(geometry)
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        validate_chart_style(style)?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders into an external cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
