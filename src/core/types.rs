use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full drawing surface handed to the chart by the hosting layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Padding between the viewport edge and the plot surface.
///
/// The left inset hosts tick labels. The x-axis label row is a strip of
/// `label_row` pixels along the viewport bottom, below the bottom inset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    #[serde(default = "default_label_row")]
    pub label_row: f64,
}

fn default_label_row() -> f64 {
    32.0
}

impl PlotInsets {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            label_row: 32.0,
        }
    }

    #[must_use]
    pub const fn with_label_row(mut self, label_row: f64) -> Self {
        self.label_row = label_row;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
            ("label_row", self.label_row),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot inset `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self::new(32.0, 16.0, 24.0, 24.0)
    }
}

/// Plot surface rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, insets: PlotInsets) -> Self {
        Self {
            left: insets.left,
            top: insets.top,
            width: f64::from(viewport.width) - insets.left - insets.right,
            height: f64::from(viewport.height) - insets.top - insets.bottom - insets.label_row,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Converts a viewport x into plot-local x.
    #[must_use]
    pub fn to_local_x(self, viewport_x: f64) -> f64 {
        viewport_x - self.left
    }

    /// Converts a plot-local point into viewport coordinates.
    #[must_use]
    pub fn to_viewport(self, point: PlotPoint) -> PlotPoint {
        PlotPoint::new(point.x + self.left, point.y + self.top)
    }
}

/// Strip along the viewport bottom hosting the x-axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRow {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelRow {
    pub const PADDING_X: f64 = 16.0;

    #[must_use]
    pub fn from_viewport(viewport: Viewport, insets: PlotInsets) -> Self {
        Self {
            left: Self::PADDING_X,
            top: f64::from(viewport.height) - insets.label_row,
            width: (f64::from(viewport.width) - 2.0 * Self::PADDING_X).max(0.0),
            height: insets.label_row,
        }
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }

    /// Horizontal center of cell `slot` when the row is split into `slots`
    /// equal cells.
    #[must_use]
    pub fn cell_center_x(self, slot: usize, slots: usize) -> f64 {
        let cell = self.width / slots.max(1) as f64;
        self.left + cell * (slot as f64 + 0.5)
    }

    /// Cell under `x`, if any.
    #[must_use]
    pub fn cell_at(self, x: f64, slots: usize) -> Option<usize> {
        if slots == 0 || self.width <= 0.0 || x < self.left || x > self.left + self.width {
            return None;
        }
        let cell = self.width / slots as f64;
        Some((((x - self.left) / cell) as usize).min(slots - 1))
    }
}

/// Point in plot-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
