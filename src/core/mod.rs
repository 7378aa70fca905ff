pub mod curve;
pub mod scale;
pub mod series;
pub mod types;

pub use curve::{CubicSegment, CurveSegments, SmoothCurve, project_smooth_curve};
pub use scale::{DegenerateReason, SeriesGeometry};
pub use series::{AxisLabels, SampleSeries, YAxisTicks};
pub use types::{LabelRow, PlotArea, PlotInsets, PlotPoint, Viewport};
