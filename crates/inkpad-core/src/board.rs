//! Drawing document and the session that edits it.

use std::sync::Arc;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::dispatch::{GestureEffect, ToolDispatcher};
use crate::history::History;
use crate::pointer::{PointerEvent, PointerSession, SurfaceFrame};
use crate::shapes::{Rgba, Shape, ShapeId};
use crate::storage::{KvStore, MemoryStore, PersistenceBridge};
use crate::tools::{ToolKind, ToolSettings};

/// An ordered drawing: creation order is paint order, back to front.
///
/// Serializes transparently as a JSON array of shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drawing {
    shapes: Vec<Shape>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything drawn so far.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Replace the shape carrying `id`, keeping its paint position.
    /// Returns whether a shape was replaced.
    pub fn replace(&mut self, id: ShapeId, shape: Shape) -> bool {
        match self.shapes.iter_mut().find(|s| s.id() == id) {
            Some(slot) => {
                *slot = shape;
                true
            }
            None => false,
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Topmost shape under `point`, scanning front to back.
    pub fn top_shape_at(&self, point: Point, tolerance: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point, tolerance))
            .map(|s| s.id())
    }

    /// Bounding box of the whole drawing, `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

/// One editing session over a drawing.
///
/// Owns the drawing, tool settings, history, and gesture state, and
/// mirrors every change into the key-value store. The render surface
/// reads `drawing()` each frame; the toolbar drives the imperative
/// calls. All mutation happens through one `Board` on one thread.
pub struct Board {
    drawing: Drawing,
    settings: ToolSettings,
    history: History,
    pointer: PointerSession,
    dispatcher: ToolDispatcher,
    persist: PersistenceBridge,
}

impl Board {
    /// Open a session over `store`, restoring whatever state a previous
    /// session left there. Missing or malformed state falls back to the
    /// empty drawing and default settings.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        let persist = PersistenceBridge::new(store);
        Self {
            drawing: persist.load_drawing(),
            settings: persist.load_settings(),
            history: persist.load_history(),
            pointer: PointerSession::new(),
            dispatcher: ToolDispatcher::new(),
            persist,
        }
    }

    /// Session over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Feed one pointer event, with the surface frame valid at event
    /// time (`None` while the surface is not attached). Events are
    /// processed synchronously, in arrival order.
    pub fn pointer_event(&mut self, event: PointerEvent, frame: Option<&SurfaceFrame>) {
        match event {
            PointerEvent::Down { position } => {
                let Some(local) = self.pointer.begin(position, frame) else {
                    return;
                };
                let effect = self.dispatcher.pointer_down(
                    &mut self.drawing,
                    &mut self.history,
                    &self.settings,
                    local,
                );
                match effect {
                    GestureEffect::Started(id) => {
                        self.pointer.set_in_progress(id);
                        self.persist.save_drawing(&self.drawing);
                        self.persist.save_history(&self.history);
                    }
                    GestureEffect::Recolored(_) => {
                        self.persist.save_drawing(&self.drawing);
                        self.persist.save_history(&self.history);
                    }
                    GestureEffect::Ignored => {}
                }
            }
            PointerEvent::Move { position } => {
                let Some(local) = self.pointer.update(position, frame) else {
                    return;
                };
                let Some(id) = self.pointer.in_progress() else {
                    return;
                };
                if self.dispatcher.pointer_moved(&mut self.drawing, id, local) {
                    self.persist.save_drawing(&self.drawing);
                }
            }
            PointerEvent::Up { .. } | PointerEvent::Leave { .. } => {
                self.pointer.end();
                self.dispatcher.pointer_up();
            }
        }
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.settings.tool = tool;
        self.persist.save_settings(&self.settings);
    }

    pub fn set_stroke_color(&mut self, color: Rgba) {
        self.settings.stroke_color = color;
        self.persist.save_settings(&self.settings);
    }

    pub fn set_fill_color(&mut self, color: Rgba) {
        self.settings.fill_color = color;
        self.persist.save_settings(&self.settings);
    }

    /// Set the stroke width, clamped to the supported range.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.settings.set_stroke_width(width);
        self.persist.save_settings(&self.settings);
    }

    /// Swap the drawing with the most recent undo snapshot.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.drawing) {
            return false;
        }
        self.persist.save_drawing(&self.drawing);
        self.persist.save_history(&self.history);
        true
    }

    /// Swap the drawing with the most recent redo snapshot.
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.drawing) {
            return false;
        }
        self.persist.save_drawing(&self.drawing);
        self.persist.save_history(&self.history);
        true
    }

    /// Wipe the drawing and all history. Unrecoverable; the toolbar
    /// confirms with the user before calling this.
    pub fn clear_all(&mut self) {
        log::debug!("clearing drawing and history");
        self.drawing.clear();
        self.history.clear();
        self.persist.save_drawing(&self.drawing);
        self.persist.save_history(&self.history);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }
}
