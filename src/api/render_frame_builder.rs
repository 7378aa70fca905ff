use crate::core::{PlotArea, SeriesGeometry, project_smooth_curve};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, CurvePrimitive, LineCap, LinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::BalanceChart;

/// Rounds to the nearest integer for axis and value labels.
#[must_use]
pub fn format_rounded(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded:.0}")
}

impl<R: Renderer> BalanceChart<R> {
    /// Materializes the current state into a frame without touching the renderer.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        self.append_background(&mut frame);

        let Some(geometry) = self.geometry() else {
            self.append_placeholder(&mut frame);
            return Ok(frame);
        };
        let area = self.plot_area();

        self.append_gridlines(&mut frame, area, geometry);
        self.append_curve(&mut frame, area, geometry);
        self.append_selected_marker(&mut frame, area, geometry);
        self.append_scrubber(&mut frame, area, geometry);
        self.append_axis_labels(&mut frame);

        frame.validate()?;
        Ok(frame)
    }

    fn append_background(&self, frame: &mut RenderFrame) {
        let style = self.style;
        frame.push_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(self.viewport.width),
                f64::from(self.viewport.height),
                style.background_color,
            )
            .with_corner_radius(style.background_corner_radius),
        );
    }

    fn append_placeholder(&self, frame: &mut RenderFrame) {
        let style = self.style;
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                style.placeholder_text,
                f64::from(self.viewport.width) / 2.0,
                f64::from(self.viewport.height) / 2.0,
                style.placeholder_font_size_px,
                style.placeholder_color,
                TextHAlign::Center,
            ),
        );
    }

    fn append_gridlines(&self, frame: &mut RenderFrame, area: PlotArea, geometry: SeriesGeometry) {
        let style = self.style;
        for tick in self.y_axis_ticks.values() {
            let y = area.top + geometry.value_to_y(*tick);
            if style.show_grid_lines {
                frame.push_line(
                    CanvasLayerKind::Grid,
                    LinePrimitive::new(
                        area.left,
                        y,
                        area.left + area.width,
                        y,
                        style.grid_line_width,
                        style.grid_line_color,
                    ),
                );
            }
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format_rounded(*tick),
                    area.left + style.tick_label_offset_x,
                    y + style.tick_label_offset_y,
                    style.tick_label_font_size_px,
                    style.tick_label_color,
                    TextHAlign::Right,
                ),
            );
        }
    }

    fn append_curve(&self, frame: &mut RenderFrame, area: PlotArea, geometry: SeriesGeometry) {
        let points = geometry.project(&self.samples);
        if let Some(curve) = project_smooth_curve(&points) {
            frame.push_curve(
                CanvasLayerKind::Series,
                CurvePrimitive::from_curve(
                    &curve,
                    area.left,
                    area.top,
                    self.style.curve_width,
                    LineCap::Round,
                    self.style.curve_color,
                ),
            );
        }
    }

    fn append_selected_marker(
        &self,
        frame: &mut RenderFrame,
        area: PlotArea,
        geometry: SeriesGeometry,
    ) {
        let style = self.style;
        let Some(index) = self.selected_index() else {
            return;
        };
        let Some(value) = self.samples.get(index) else {
            return;
        };
        let point = area.to_viewport(geometry.point(index, value));

        frame.push_circle(
            CanvasLayerKind::Marker,
            CirclePrimitive::ring(
                point.x,
                point.y,
                style.marker_ring_radius,
                style.marker_ring_width,
                style.marker_ring_color,
            ),
        );
        frame.push_circle(
            CanvasLayerKind::Marker,
            CirclePrimitive::filled(
                point.x,
                point.y,
                style.marker_dot_radius,
                style.marker_dot_color,
            ),
        );
        frame.push_text(
            CanvasLayerKind::Marker,
            TextPrimitive::new(
                format!("{}{}", style.value_label_prefix, format_rounded(value)),
                point.x,
                point.y - style.value_label_offset_y,
                style.value_label_font_size_px,
                style.value_label_color,
                TextHAlign::Center,
            ),
        );
    }

    fn append_scrubber(&self, frame: &mut RenderFrame, area: PlotArea, geometry: SeriesGeometry) {
        let Some(x) = self.selection.and_then(|state| state.scrubber_x(geometry)) else {
            return;
        };
        if !x.is_finite() {
            return;
        }
        let x = area.left + x;
        frame.push_line(
            CanvasLayerKind::Scrubber,
            LinePrimitive::new(
                x,
                area.top,
                x,
                area.bottom(),
                self.style.scrubber_width,
                self.style.scrubber_color,
            ),
        );
    }

    fn append_axis_labels(&self, frame: &mut RenderFrame) {
        let style = self.style;
        let row = self.label_row();
        let slots = self.axis_labels.len();
        let selected = self.selected_index();
        let baseline = row.top + (row.height + style.axis_label_font_size_px * 0.7) / 2.0;

        for (slot, (index, text)) in self.axis_labels.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let color = if selected == Some(index) {
                style.axis_label_selected_color
            } else {
                style.axis_label_color
            };
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    text,
                    row.cell_center_x(slot, slots),
                    baseline,
                    style.axis_label_font_size_px,
                    color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}
