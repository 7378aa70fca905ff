use serde::{Deserialize, Serialize};

use crate::core::SeriesGeometry;

/// Vertical guide line position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scrubber {
    /// Follows the raw pointer offset (plot-local x).
    Pointer { x: f64 },
    /// Pinned to a sample's x; follows the sample across resizes.
    Snapped { index: usize },
}

impl Scrubber {
    #[must_use]
    pub fn resolve_x(self, geometry: SeriesGeometry) -> f64 {
        match self {
            Self::Pointer { x } => x,
            Self::Snapped { index } => geometry.index_to_x(index),
        }
    }
}

/// Input events the chart reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// Pointer pressed/dragged at plot-local `x`.
    PointerMove { x: f64 },
    /// X-axis label for sample `index` tapped.
    LabelTap { index: usize },
}

/// Selected sample plus scrubber. Owned exclusively by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_index: usize,
    scrubber: Option<Scrubber>,
}

impl SelectionState {
    /// Starts at `index` (clamped) with no scrubber shown.
    #[must_use]
    pub fn initial(index: usize, geometry: SeriesGeometry) -> Self {
        Self {
            selected_index: geometry.clamp_index(index),
            scrubber: None,
        }
    }

    #[must_use]
    pub fn selected_index(self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn scrubber(self) -> Option<Scrubber> {
        self.scrubber
    }

    #[must_use]
    pub fn scrubber_x(self, geometry: SeriesGeometry) -> Option<f64> {
        self.scrubber.map(|scrubber| scrubber.resolve_x(geometry))
    }

    /// Pure transition: `(state, event) -> state`.
    #[must_use]
    pub fn reduce(self, event: ChartEvent, geometry: SeriesGeometry) -> Self {
        match event {
            ChartEvent::PointerMove { x } => Self {
                selected_index: geometry.x_to_index(x),
                scrubber: Some(Scrubber::Pointer { x }),
            },
            ChartEvent::LabelTap { index } => {
                let index = geometry.clamp_index(index);
                Self {
                    selected_index: index,
                    scrubber: Some(Scrubber::Snapped { index }),
                }
            }
        }
    }

    /// Re-derives the selection for new geometry. A pointer scrubber keeps
    /// its x and the selection moves to the sample nearest to it.
    #[must_use]
    pub fn relayout(self, geometry: SeriesGeometry) -> Self {
        let selected_index = match self.scrubber {
            Some(Scrubber::Pointer { x }) => geometry.x_to_index(x),
            _ => geometry.clamp_index(self.selected_index),
        };
        Self {
            selected_index,
            scrubber: self.scrubber,
        }
    }
}
