use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{PlotArea, PlotPoint};
use crate::core::{SampleSeries, YAxisTicks};
use crate::error::{ChartError, ChartResult};

/// Why a series cannot be laid out on the current surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DegenerateReason {
    /// A curve needs at least two samples.
    TooFewSamples { count: usize },
    /// The largest tick defines the vertical scale and must be > 0.
    NonPositiveCeiling { max_y: f64 },
    /// Insets consume the whole viewport.
    EmptyPlotArea { width: f64, height: f64 },
    /// A sample or tick overflows to a non-finite pixel position.
    UnprojectableValue { value: f64 },
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSamples { count } => {
                write!(f, "at least 2 samples are required, got {count}")
            }
            Self::NonPositiveCeiling { max_y } => {
                write!(f, "vertical ceiling must be > 0, got {max_y}")
            }
            Self::EmptyPlotArea { width, height } => {
                write!(f, "plot area is empty: width={width}, height={height}")
            }
            Self::UnprojectableValue { value } => {
                write!(f, "value {value} does not project to a finite pixel")
            }
        }
    }
}

/// Index/value to plot-pixel mapping for one series on one surface size.
///
/// Point `i` sits at `x = i * spacing + spacing / 2` with
/// `spacing = width / (count - 1)`, so the last point lands half a spacing
/// past the right edge. Values above the ceiling map above the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesGeometry {
    width: f64,
    height: f64,
    spacing: f64,
    max_y: f64,
    sample_count: usize,
}

impl SeriesGeometry {
    pub fn new(width: f64, height: f64, sample_count: usize, max_y: f64) -> ChartResult<Self> {
        if sample_count < 2 {
            return Err(ChartError::Degenerate(DegenerateReason::TooFewSamples {
                count: sample_count,
            }));
        }
        if !max_y.is_finite() || max_y <= 0.0 {
            return Err(ChartError::Degenerate(
                DegenerateReason::NonPositiveCeiling { max_y },
            ));
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::Degenerate(DegenerateReason::EmptyPlotArea {
                width,
                height,
            }));
        }

        Ok(Self {
            width,
            height,
            spacing: width / (sample_count - 1) as f64,
            max_y,
            sample_count,
        })
    }

    pub fn for_series(
        area: PlotArea,
        series: &SampleSeries,
        ticks: &YAxisTicks,
    ) -> ChartResult<Self> {
        let geometry = Self::new(area.width, area.height, series.len(), ticks.max())?;
        if let Some(value) = series
            .values()
            .iter()
            .chain(ticks.values())
            .copied()
            .find(|value| !geometry.value_to_y(*value).is_finite())
        {
            return Err(ChartError::Degenerate(
                DegenerateReason::UnprojectableValue { value },
            ));
        }
        Ok(geometry)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn spacing(self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub fn last_index(self) -> usize {
        self.sample_count - 1
    }

    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        index as f64 * self.spacing + self.spacing / 2.0
    }

    /// Inverse of `index_to_x`, snapped to the nearest index and clamped to bounds.
    #[must_use]
    pub fn x_to_index(self, x: f64) -> usize {
        let slot = ((x - self.spacing / 2.0) / self.spacing).round();
        if slot.is_nan() {
            return 0;
        }
        // Float-to-int casts saturate, so infinities clamp too.
        (slot.clamp(0.0, self.last_index() as f64)) as usize
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.height - (value / self.max_y) * self.height
    }

    #[must_use]
    pub fn point(self, index: usize, value: f64) -> PlotPoint {
        PlotPoint::new(self.index_to_x(index), self.value_to_y(value))
    }

    #[must_use]
    pub fn project(self, series: &SampleSeries) -> Vec<PlotPoint> {
        series
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| self.point(index, *value))
            .collect()
    }

    #[must_use]
    pub fn clamp_index(self, index: usize) -> usize {
        index.min(self.last_index())
    }
}
