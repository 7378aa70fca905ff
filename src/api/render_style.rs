use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual contract for one chart frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub background_color: Color,
    pub background_corner_radius: f64,
    pub curve_color: Color,
    pub curve_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub show_grid_lines: bool,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    /// Right edge of tick labels relative to the plot's left edge.
    pub tick_label_offset_x: f64,
    /// Tick label baseline below the gridline.
    pub tick_label_offset_y: f64,
    pub marker_ring_color: Color,
    pub marker_ring_radius: f64,
    pub marker_ring_width: f64,
    pub marker_dot_color: Color,
    pub marker_dot_radius: f64,
    pub value_label_color: Color,
    pub value_label_font_size_px: f64,
    /// Value label baseline above the selected point.
    pub value_label_offset_y: f64,
    pub value_label_prefix: &'static str,
    pub scrubber_color: Color,
    pub scrubber_width: f64,
    pub axis_label_color: Color,
    pub axis_label_selected_color: Color,
    pub axis_label_font_size_px: f64,
    pub placeholder_text: &'static str,
    pub placeholder_color: Color,
    pub placeholder_font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_argb(0xFF2C_2C2C),
            background_corner_radius: 20.0,
            curve_color: Color::WHITE,
            curve_width: 3.0,
            grid_line_color: Color::rgba(1.0, 1.0, 1.0, 0.12),
            grid_line_width: 1.0,
            show_grid_lines: true,
            tick_label_color: Color::LIGHT_GRAY,
            tick_label_font_size_px: 11.0,
            tick_label_offset_x: -6.0,
            tick_label_offset_y: 4.0,
            marker_ring_color: Color::RED,
            marker_ring_radius: 4.5,
            marker_ring_width: 1.5,
            marker_dot_color: Color::WHITE,
            marker_dot_radius: 3.0,
            value_label_color: Color::RED,
            value_label_font_size_px: 11.0,
            value_label_offset_y: 8.0,
            value_label_prefix: "$",
            scrubber_color: Color::GRAY,
            scrubber_width: 1.0,
            axis_label_color: Color::WHITE,
            axis_label_selected_color: Color::RED,
            axis_label_font_size_px: 12.0,
            placeholder_text: "No data",
            placeholder_color: Color::LIGHT_GRAY,
            placeholder_font_size_px: 16.0,
        }
    }
}

pub(crate) fn validate_chart_style(style: ChartStyle) -> ChartResult<()> {
    for color in [
        style.background_color,
        style.curve_color,
        style.grid_line_color,
        style.tick_label_color,
        style.marker_ring_color,
        style.marker_dot_color,
        style.value_label_color,
        style.scrubber_color,
        style.axis_label_color,
        style.axis_label_selected_color,
        style.placeholder_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("curve_width", style.curve_width),
        ("grid_line_width", style.grid_line_width),
        ("tick_label_font_size_px", style.tick_label_font_size_px),
        ("marker_ring_radius", style.marker_ring_radius),
        ("marker_ring_width", style.marker_ring_width),
        ("marker_dot_radius", style.marker_dot_radius),
        ("value_label_font_size_px", style.value_label_font_size_px),
        ("scrubber_width", style.scrubber_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("placeholder_font_size_px", style.placeholder_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "chart style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("background_corner_radius", style.background_corner_radius),
        ("tick_label_offset_x", style.tick_label_offset_x),
        ("tick_label_offset_y", style.tick_label_offset_y),
        ("value_label_offset_y", style.value_label_offset_y),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "chart style `{name}` must be finite"
            )));
        }
    }
    Ok(())
}
