//! Rectangle shape.

use super::{Rgba, ShapeId};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle anchored where its creating drag began.
///
/// `width` and `height` are signed: while the pointer sits left of or
/// above the anchor they go negative, and `as_rect` normalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Anchor corner, fixed at the pointer-down position.
    pub position: Point,
    /// Signed horizontal extent.
    pub width: f64,
    /// Signed vertical extent.
    pub height: f64,
    /// Outline color.
    pub stroke_color: Rgba,
    /// Outline width.
    pub stroke_width: f64,
    /// Interior color.
    pub fill_color: Rgba,
}

impl Rectangle {
    /// Create a zero-size rectangle at the pointer-down position.
    pub fn new(origin: Point, stroke_color: Rgba, stroke_width: f64, fill_color: Rgba) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: origin,
            width: 0.0,
            height: 0.0,
            stroke_color,
            stroke_width,
            fill_color,
        }
    }

    /// Copy of this rectangle with its far corner stretched to `point`,
    /// anchor and identifier untouched.
    pub fn resized_to(&self, point: Point) -> Self {
        Self {
            width: point.x - self.position.x,
            height: point.y - self.position.y,
            ..self.clone()
        }
    }

    /// Copy with a different interior color, identifier untouched.
    pub fn with_fill(&self, fill: Rgba) -> Self {
        Self {
            fill_color: fill,
            ..self.clone()
        }
    }

    /// Normalized kurbo rect (handles negative extents).
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(
            self.position,
            self.position + Vec2::new(self.width, self.height),
        )
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.as_rect()
    }

    /// Rectangles are always filled, so any interior point hits.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_rect().inflate(tolerance, tolerance).contains(point)
    }

    pub fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}
