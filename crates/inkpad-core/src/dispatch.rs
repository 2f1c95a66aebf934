//! Routes pointer gestures to the drawing according to the selected tool.

use kurbo::Point;

use crate::board::Drawing;
use crate::history::History;
use crate::shapes::{Rgba, ShapeId};
use crate::tools::ToolSettings;

/// Click slack for the recolor tool, in surface-local units.
pub const RECOLOR_HIT_TOLERANCE: f64 = 5.0;

/// Gesture phase of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A drag is building a shape.
    Drawing,
}

/// What a routed pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEffect {
    /// Nothing changed.
    Ignored,
    /// A shape was appended and is now in progress.
    Started(ShapeId),
    /// An existing shape's fill was replaced.
    Recolored(ShapeId),
}

/// Applies pointer gestures to a drawing.
///
/// The history snapshot for a gesture is taken once, at pointer-down,
/// before anything changes. Every later move replaces the in-progress
/// shape in place, so one undo reverts the whole gesture rather than a
/// single move event.
#[derive(Debug, Clone, Default)]
pub struct ToolDispatcher {
    state: DispatchState,
}

impl ToolDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Route a pointer-down. Shape tools snapshot the drawing and append
    /// a fresh shape; the recolor tool replaces the fill of the topmost
    /// shape under the click without entering the drag state. A down
    /// while a drag is in flight is ignored.
    pub fn pointer_down(
        &mut self,
        drawing: &mut Drawing,
        history: &mut History,
        settings: &ToolSettings,
        position: Point,
    ) -> GestureEffect {
        if self.state == DispatchState::Drawing {
            return GestureEffect::Ignored;
        }

        match settings.make_shape(position) {
            Some(shape) => {
                let id = shape.id();
                history.record(drawing);
                drawing.push(shape);
                self.state = DispatchState::Drawing;
                GestureEffect::Started(id)
            }
            None => recolor_topmost(drawing, history, settings.fill_color, position),
        }
    }

    /// Advance the in-progress shape to the pointer position. Returns
    /// whether the drawing changed.
    pub fn pointer_moved(&mut self, drawing: &mut Drawing, id: ShapeId, position: Point) -> bool {
        if self.state != DispatchState::Drawing {
            return false;
        }
        let Some(updated) = drawing.shape(id).map(|s| s.dragged_to(position)) else {
            return false;
        };
        drawing.replace(id, updated)
    }

    /// Finish the gesture. The snapshot was taken at pointer-down, so
    /// there is nothing to record here.
    pub fn pointer_up(&mut self) {
        self.state = DispatchState::Idle;
    }
}

/// Recolor the topmost shape under `position`. A miss, or a hit on a
/// shape without a fill (a stroke), changes nothing at all.
fn recolor_topmost(
    drawing: &mut Drawing,
    history: &mut History,
    fill: Rgba,
    position: Point,
) -> GestureEffect {
    let Some(id) = drawing.top_shape_at(position, RECOLOR_HIT_TOLERANCE) else {
        return GestureEffect::Ignored;
    };
    let Some(shape) = drawing.shape(id) else {
        return GestureEffect::Ignored;
    };
    if !shape.has_fill() {
        return GestureEffect::Ignored;
    }

    let recolored = shape.recolored(fill);
    history.record(drawing);
    drawing.replace(id, recolored);
    GestureEffect::Recolored(id)
}
