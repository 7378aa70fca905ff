//! GTK4 host for [`BalanceChart`]: a `DrawingArea` that renders through
//! Cairo and feeds press/drag gestures into the selection reducer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::BalanceChart;
use crate::core::Viewport;
use crate::render::CairoRenderer;

pub type SharedChart = Rc<RefCell<BalanceChart<CairoRenderer>>>;

pub struct GtkChartAdapter {
    chart: SharedChart,
    drawing_area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(chart: BalanceChart<CairoRenderer>) -> Self {
        let chart = Rc::new(RefCell::new(chart));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        {
            let viewport = chart.borrow().viewport();
            drawing_area.set_content_width(viewport.width as i32);
            drawing_area.set_content_height(viewport.height as i32);
        }

        drawing_area.set_draw_func({
            let chart = Rc::clone(&chart);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = chart.try_borrow_mut() else {
                    return;
                };

                let viewport = Viewport::new(width as u32, height as u32);
                if let Err(err) = chart.set_viewport(viewport) {
                    warn!(error = %err, "viewport rejected");
                    return;
                }
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "balance chart draw failed");
                }
            }
        });

        attach_interactions(&drawing_area, Rc::clone(&chart));
        Self {
            chart,
            drawing_area,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart {
        Rc::clone(&self.chart)
    }
}

/// A press on a label cell is a label tap; a press or drag above the label
/// row moves the scrubber. Drags that start on the label row never scrub.
fn attach_interactions(drawing_area: &gtk::DrawingArea, chart: SharedChart) {
    let drag = gtk::GestureDrag::new();
    let scrubbing = Rc::new(Cell::new(false));

    {
        let chart = Rc::clone(&chart);
        let drawing_area = drawing_area.clone();
        let scrubbing = Rc::clone(&scrubbing);
        drag.connect_drag_begin(move |_, start_x, start_y| {
            let Ok(mut chart) = chart.try_borrow_mut() else {
                return;
            };
            scrubbing.set(start_y < chart.label_row().top);
            if chart.on_viewport_press(start_x, start_y) {
                drawing_area.queue_draw();
            }
        });
    }

    {
        let chart = Rc::clone(&chart);
        let drawing_area = drawing_area.clone();
        let scrubbing = Rc::clone(&scrubbing);
        drag.connect_drag_update(move |gesture, offset_x, _offset_y| {
            if !scrubbing.get() {
                return;
            }
            let Some((start_x, _)) = gesture.start_point() else {
                return;
            };
            if let Ok(mut chart) = chart.try_borrow_mut() {
                if chart.on_viewport_pointer_move(start_x + offset_x) {
                    drawing_area.queue_draw();
                }
            }
        });
    }

    {
        let scrubbing = Rc::clone(&scrubbing);
        drag.connect_drag_end(move |_, _, _| {
            scrubbing.set(false);
        });
    }

    drawing_area.add_controller(drag);
}
