use tracing::trace;

use crate::interaction::ChartEvent;
use crate::render::Renderer;

use super::BalanceChart;

impl<R: Renderer> BalanceChart<R> {
    /// Runs one event through the selection reducer.
    ///
    /// Returns `true` when the selection or scrubber changed and the host
    /// should redraw. Events are ignored while the chart is degenerate.
    pub fn dispatch(&mut self, event: ChartEvent) -> bool {
        let (Some(geometry), Some(state)) = (self.geometry(), self.selection) else {
            trace!(?event, "event ignored by degenerate chart");
            return false;
        };

        let next = state.reduce(event, geometry);
        trace!(
            ?event,
            selected = next.selected_index(),
            "selection updated"
        );
        self.selection = Some(next);
        next != state
    }

    /// Pointer pressed or dragged at plot-local `x`.
    pub fn on_pointer_move(&mut self, x: f64) -> bool {
        self.dispatch(ChartEvent::PointerMove { x })
    }

    /// Pointer pressed or dragged at viewport `x`.
    pub fn on_viewport_pointer_move(&mut self, viewport_x: f64) -> bool {
        let x = self.plot_area().to_local_x(viewport_x);
        self.on_pointer_move(x)
    }

    /// X-axis label of sample `index` tapped.
    pub fn on_label_tap(&mut self, index: usize) -> bool {
        self.dispatch(ChartEvent::LabelTap { index })
    }

    /// Sample index whose x-axis label cell contains viewport point `(x, y)`.
    #[must_use]
    pub fn label_index_at(&self, x: f64, y: f64) -> Option<usize> {
        let row = self.label_row();
        if !row.contains(x, y) {
            return None;
        }
        let slot = row.cell_at(x, self.axis_labels.len())?;
        self.axis_labels.iter().nth(slot).map(|(index, _)| index)
    }

    /// Routes a click at viewport `(x, y)`: label cells become label taps,
    /// everything else is a pointer press. Returns `true` when a redraw is due.
    pub fn on_viewport_press(&mut self, x: f64, y: f64) -> bool {
        match self.label_index_at(x, y) {
            Some(index) => self.on_label_tap(index),
            None if y < self.label_row().top => self.on_viewport_pointer_move(x),
            None => false,
        }
    }
}
