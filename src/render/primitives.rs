use crate::core::{CubicSegment, PlotPoint, SmoothCurve};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.533, 0.533, 0.533);
    pub const LIGHT_GRAY: Self = Self::rgb(0.8, 0.8, 0.8);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from packed `0xAARRGGBB`.
    #[must_use]
    pub fn from_argb(packed: u32) -> Self {
        let channel = |shift: u32| f64::from((packed >> shift) & 0xFF) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

fn ensure_positive(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}

/// Stroke end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line")?;
        ensure_positive(self.stroke_width, "line stroke width")?;
        self.color.validate()
    }
}

/// Stroked cubic path in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePrimitive {
    pub start: PlotPoint,
    pub segments: Vec<CubicSegment>,
    pub stroke_width: f64,
    pub cap: LineCap,
    pub color: Color,
}

impl CurvePrimitive {
    /// Copies `curve` shifted by `(dx, dy)`.
    #[must_use]
    pub fn from_curve(
        curve: &SmoothCurve,
        dx: f64,
        dy: f64,
        stroke_width: f64,
        cap: LineCap,
        color: Color,
    ) -> Self {
        let shift = |point: PlotPoint| PlotPoint::new(point.x + dx, point.y + dy);
        Self {
            start: shift(curve.start),
            segments: curve
                .segments
                .iter()
                .map(|segment| CubicSegment {
                    control1: shift(segment.control1),
                    control2: shift(segment.control2),
                    end: shift(segment.end),
                })
                .collect(),
            stroke_width,
            cap,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.segments.is_empty() {
            return Err(ChartError::InvalidData(
                "curve primitive must have at least one segment".to_owned(),
            ));
        }
        ensure_finite(&[self.start.x, self.start.y], "curve")?;
        for segment in &self.segments {
            ensure_finite(
                &[
                    segment.control1.x,
                    segment.control1.y,
                    segment.control2.x,
                    segment.control2.y,
                    segment.end.x,
                    segment.end.y,
                ],
                "curve",
            )?;
        }
        ensure_positive(self.stroke_width, "curve stroke width")?;
        self.color.validate()
    }
}

/// Circle with optional fill and optional outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn filled(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            x,
            y,
            radius,
            fill_color: Some(color),
            stroke_color: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn ring(x: f64, y: f64, radius: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x,
            y,
            radius,
            fill_color: None,
            stroke_color: Some(color),
            stroke_width,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y], "circle")?;
        ensure_positive(self.radius, "circle radius")?;
        match (self.fill_color, self.stroke_color) {
            (None, None) => Err(ChartError::InvalidData(
                "circle must have a fill or a stroke".to_owned(),
            )),
            (fill, stroke) => {
                if let Some(color) = fill {
                    color.validate()?;
                }
                if let Some(color) = stroke {
                    ensure_positive(self.stroke_width, "circle stroke width")?;
                    color.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// Filled rectangle with optional border and rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y], "rect")?;
        ensure_positive(self.width, "rect width")?;
        ensure_positive(self.height, "rect height")?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y], "text")?;
        ensure_positive(self.font_size_px, "font size")?;
        self.color.validate()
    }
}
