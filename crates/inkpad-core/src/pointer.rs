//! Pointer session management for unified mouse/touch gestures.

use kurbo::{Affine, Point};

use crate::shapes::ShapeId;

/// Pointer event forwarded by the render surface, with the position in
/// the host viewport's coordinate space. Mouse and touch input both
/// arrive through these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// Pointer left the surface mid-gesture; handled exactly like `Up`.
    Leave { position: Point },
}

impl PointerEvent {
    /// Raw viewport position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Leave { position } => *position,
        }
    }
}

/// Placement of the render surface inside the host viewport: the
/// viewport position of its top-left corner plus the surface's own
/// pan/zoom transform (identity when untransformed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    /// Viewport position of the surface's top-left corner.
    pub origin: Point,
    /// Surface-local transform applied on top of the origin offset.
    pub transform: Affine,
}

impl SurfaceFrame {
    /// Frame for an untransformed surface at `origin`.
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            transform: Affine::IDENTITY,
        }
    }

    pub fn with_transform(origin: Point, transform: Affine) -> Self {
        Self { origin, transform }
    }

    /// Map a raw viewport position into surface-local coordinates:
    /// subtract the origin, then invert the surface transform.
    pub fn to_local(&self, raw: Point) -> Point {
        self.transform.inverse() * (raw - self.origin.to_vec2())
    }
}

impl Default for SurfaceFrame {
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

/// Tracks the lifecycle of the single active pointer gesture.
///
/// At most one gesture is active at a time; a re-entrant pointer-down
/// and a gesture on an unresolvable surface both fail silently.
#[derive(Debug, Clone, Default)]
pub struct PointerSession {
    active: bool,
    in_progress: Option<ShapeId>,
}

impl PointerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture, resolving the raw position against the surface
    /// frame. Returns `None` when a gesture is already active or the
    /// surface is not attached.
    pub fn begin(&mut self, raw: Point, frame: Option<&SurfaceFrame>) -> Option<Point> {
        if self.active {
            return None;
        }
        let local = frame?.to_local(raw);
        self.active = true;
        Some(local)
    }

    /// Resolve a move event. Returns `None` unless a gesture is active
    /// and a shape is in progress.
    pub fn update(&self, raw: Point, frame: Option<&SurfaceFrame>) -> Option<Point> {
        if !self.active || self.in_progress.is_none() {
            return None;
        }
        Some(frame?.to_local(raw))
    }

    /// Finish the gesture and drop the in-progress reference.
    pub fn end(&mut self) {
        self.active = false;
        self.in_progress = None;
    }

    /// Mark the shape the current gesture is building.
    pub fn set_in_progress(&mut self, id: ShapeId) {
        self.in_progress = Some(id);
    }

    pub fn in_progress(&self) -> Option<ShapeId> {
        self.in_progress
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_to_local_subtracts_origin() {
        let frame = SurfaceFrame::new(Point::new(100.0, 50.0));
        let local = frame.to_local(Point::new(120.0, 70.0));
        assert!((local.x - 20.0).abs() < f64::EPSILON);
        assert!((local.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_local_inverts_transform() {
        let frame = SurfaceFrame::with_transform(Point::new(100.0, 50.0), Affine::scale(2.0));
        let local = frame.to_local(Point::new(120.0, 70.0));
        assert!((local.x - 10.0).abs() < f64::EPSILON);
        assert!((local.y - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_local_roundtrip() {
        let frame = SurfaceFrame::with_transform(
            Point::new(30.0, -20.0),
            Affine::scale(1.5) * Affine::translate((4.0, 8.0)),
        );
        let raw = Point::new(123.0, 456.0);
        let back = frame.transform * frame.to_local(raw) + frame.origin.to_vec2();
        assert!((back.x - raw.x).abs() < 1e-10);
        assert!((back.y - raw.y).abs() < 1e-10);
    }

    #[test]
    fn test_begin_requires_frame() {
        let mut session = PointerSession::new();
        assert!(session.begin(Point::new(5.0, 5.0), None).is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn test_begin_rejects_reentrant_down() {
        let frame = SurfaceFrame::default();
        let mut session = PointerSession::new();

        assert!(session.begin(Point::new(5.0, 5.0), Some(&frame)).is_some());
        assert!(session.begin(Point::new(6.0, 6.0), Some(&frame)).is_none());
        assert!(session.is_active());
    }

    #[test]
    fn test_update_needs_in_progress_shape() {
        let frame = SurfaceFrame::default();
        let mut session = PointerSession::new();

        session.begin(Point::new(5.0, 5.0), Some(&frame));
        assert!(session.update(Point::new(6.0, 6.0), Some(&frame)).is_none());

        session.set_in_progress(Uuid::new_v4());
        assert!(session.update(Point::new(6.0, 6.0), Some(&frame)).is_some());
    }

    #[test]
    fn test_end_resets_session() {
        let frame = SurfaceFrame::default();
        let mut session = PointerSession::new();

        session.begin(Point::new(5.0, 5.0), Some(&frame));
        session.set_in_progress(Uuid::new_v4());
        session.end();

        assert!(!session.is_active());
        assert!(session.in_progress().is_none());
        assert!(session.update(Point::new(6.0, 6.0), Some(&frame)).is_none());
        // A fresh gesture can start again.
        assert!(session.begin(Point::new(7.0, 7.0), Some(&frame)).is_some());
    }
}
