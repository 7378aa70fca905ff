use serde::{Deserialize, Serialize};

/// Draw-order buckets of one chart frame, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    Marker,
    Scrubber,
    Axis,
}

impl CanvasLayerKind {
    /// Painter's order: the scrubber is drawn over the selected-point marker,
    /// axis labels last.
    pub const CANONICAL_ORDER: [Self; 6] = [
        Self::Background,
        Self::Grid,
        Self::Series,
        Self::Marker,
        Self::Scrubber,
        Self::Axis,
    ];
}
