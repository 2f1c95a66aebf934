//! Snapshot-based undo/redo history.

use std::mem;

use crate::board::Drawing;

/// Maximum number of undo snapshots kept; the oldest is dropped first.
pub const MAX_UNDO_DEPTH: usize = 50;

/// Undo/redo stacks of whole-drawing snapshots.
///
/// One snapshot is recorded per list-mutating gesture, taken before the
/// gesture changes anything, so a single undo reverts the whole gesture.
/// Snapshots are deep copies and never alias the live drawing.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Drawing>,
    redo_stack: Vec<Drawing>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild history from persisted stacks.
    pub fn from_stacks(undo_stack: Vec<Drawing>, redo_stack: Vec<Drawing>) -> Self {
        Self {
            undo_stack,
            redo_stack,
        }
    }

    /// Record the drawing as it is right now. Clears the redo stack: a
    /// new edit invalidates the redone future.
    pub fn record(&mut self, current: &Drawing) {
        self.undo_stack.push(current.clone());
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
    }

    /// Swap the drawing with the most recent undo snapshot. Returns
    /// `false` (drawing untouched) when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Drawing) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(mem::replace(current, snapshot));
        true
    }

    /// Swap the drawing with the most recent redo snapshot. Returns
    /// `false` (drawing untouched) when there is nothing to redo.
    pub fn redo(&mut self, current: &mut Drawing) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(mem::replace(current, snapshot));
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop both stacks. Used by clear-all, which has no undo path.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_stack(&self) -> &[Drawing] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Drawing] {
        &self.redo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rgba, Shape, Stroke};
    use kurbo::Point;

    fn one_stroke_drawing() -> Drawing {
        let mut drawing = Drawing::new();
        drawing.push(Shape::Stroke(Stroke::new(
            Point::new(0.0, 0.0),
            Rgba::black(),
            3.0,
        )));
        drawing
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut history = History::new();
        let mut drawing = one_stroke_drawing();
        let before = drawing.clone();

        assert!(!history.undo(&mut drawing));
        assert_eq!(drawing, before);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_on_empty_history_is_noop() {
        let mut history = History::new();
        let mut drawing = one_stroke_drawing();
        let before = drawing.clone();

        assert!(!history.redo(&mut drawing));
        assert_eq!(drawing, before);
    }

    #[test]
    fn test_undo_then_redo_restores_state() {
        let mut history = History::new();
        let mut drawing = Drawing::new();

        history.record(&drawing);
        drawing = one_stroke_drawing();
        let after_edit = drawing.clone();

        assert!(history.undo(&mut drawing));
        assert!(drawing.is_empty());
        assert!(history.can_redo());

        assert!(history.redo(&mut drawing));
        assert_eq!(drawing, after_edit);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        let mut drawing = Drawing::new();

        history.record(&drawing);
        drawing = one_stroke_drawing();
        history.undo(&mut drawing);
        assert!(history.can_redo());

        history.record(&drawing);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_snapshots_do_not_alias_live_drawing() {
        let mut history = History::new();
        let mut drawing = one_stroke_drawing();

        history.record(&drawing);
        drawing.push(Shape::Stroke(Stroke::new(
            Point::new(9.0, 9.0),
            Rgba::black(),
            3.0,
        )));

        assert_eq!(history.undo_stack()[0].len(), 1);
        assert_eq!(drawing.len(), 2);
    }

    #[test]
    fn test_depth_cap_drops_oldest() {
        let mut history = History::new();
        let drawing = Drawing::new();

        for _ in 0..(MAX_UNDO_DEPTH + 5) {
            history.record(&drawing);
        }
        assert_eq!(history.undo_stack().len(), MAX_UNDO_DEPTH);
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut history = History::new();
        let mut drawing = Drawing::new();

        history.record(&drawing);
        drawing = one_stroke_drawing();
        history.undo(&mut drawing);
        assert!(history.can_redo());

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
