use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlotPoint;

/// One cubic Bezier segment; the start point is the previous segment's end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub control1: PlotPoint,
    pub control2: PlotPoint,
    pub end: PlotPoint,
}

pub type CurveSegments = SmallVec<[CubicSegment; 8]>;

/// Smooth path through projected sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothCurve {
    pub start: PlotPoint,
    pub segments: CurveSegments,
}

impl SmoothCurve {
    /// Evaluates segment `segment` at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn sample_segment(&self, segment: usize, t: f64) -> Option<PlotPoint> {
        let start = if segment == 0 {
            self.start
        } else {
            self.segments.get(segment - 1)?.end
        };
        let cubic = self.segments.get(segment)?;
        let u = 1.0 - t;
        let w0 = u * u * u;
        let w1 = 3.0 * u * u * t;
        let w2 = 3.0 * u * t * t;
        let w3 = t * t * t;
        Some(PlotPoint::new(
            w0 * start.x + w1 * cubic.control1.x + w2 * cubic.control2.x + w3 * cubic.end.x,
            w0 * start.y + w1 * cubic.control1.y + w2 * cubic.control2.y + w3 * cubic.end.y,
        ))
    }
}

/// Builds a horizontally symmetric ease between each pair of points.
///
/// Both control points sit at the pair's mid x, at the previous and the
/// current point's y respectively, so a segment never overshoots its
/// endpoints vertically. Returns `None` when fewer than two points are given.
#[must_use]
pub fn project_smooth_curve(points: &[PlotPoint]) -> Option<SmoothCurve> {
    if points.len() < 2 {
        return None;
    }

    let segments = points
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (pair[0], pair[1]);
            let mid_x = (prev.x + curr.x) / 2.0;
            CubicSegment {
                control1: PlotPoint::new(mid_x, prev.y),
                control2: PlotPoint::new(mid_x, curr.y),
                end: curr,
            }
        })
        .collect();

    Some(SmoothCurve {
        start: points[0],
        segments,
    })
}
