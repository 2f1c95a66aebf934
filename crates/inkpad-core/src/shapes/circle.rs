//! Circle shape.

use super::{Rgba, ShapeId};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle anchored at the pointer-down position; dragging sets the
/// radius to the distance from that center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center, fixed at the pointer-down position.
    pub center: Point,
    /// Radius, non-negative by construction.
    pub radius: f64,
    /// Outline color.
    pub stroke_color: Rgba,
    /// Outline width.
    pub stroke_width: f64,
    /// Interior color.
    pub fill_color: Rgba,
}

impl Circle {
    /// Create a zero-radius circle at the pointer-down position.
    pub fn new(center: Point, stroke_color: Rgba, stroke_width: f64, fill_color: Rgba) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: 0.0,
            stroke_color,
            stroke_width,
            fill_color,
        }
    }

    /// Copy of this circle with its radius set to the distance from the
    /// center to `point`, identifier untouched.
    pub fn resized_to(&self, point: Point) -> Self {
        Self {
            radius: self.center.distance(point),
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

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        kurbo::Circle::new(self.center, self.radius).bounding_box()
    }

    /// Circles are always filled, so any interior point hits.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.center.distance(point) <= self.radius + tolerance
    }

    pub fn to_path(&self) -> BezPath {
        kurbo::Circle::new(self.center, self.radius).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_at(center: Point) -> Circle {
        Circle::new(center, Rgba::black(), 3.0, Rgba::red())
    }

    #[test]
    fn test_circle_starts_empty() {
        let circle = circle_at(Point::new(10.0, 10.0));
        assert!((circle.radius).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resized_to_distance() {
        let circle = circle_at(Point::new(0.0, 0.0)).resized_to(Point::new(3.0, 4.0));
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(circle.center, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_radius_never_negative() {
        let circle = circle_at(Point::new(50.0, 50.0)).resized_to(Point::new(10.0, 50.0));
        assert!(circle.radius >= 0.0);
        assert!((circle.radius - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let circle = circle_at(Point::new(50.0, 50.0)).resized_to(Point::new(60.0, 50.0));
        let bounds = circle.bounds();
        assert!((bounds.x0 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let circle = circle_at(Point::new(0.0, 0.0)).resized_to(Point::new(10.0, 0.0));
        assert!(circle.hit_test(Point::new(5.0, 5.0), 0.0));
        assert!(!circle.hit_test(Point::new(20.0, 0.0), 0.0));
        assert!(circle.hit_test(Point::new(12.0, 0.0), 3.0)); // Within tolerance
    }

    #[test]
    fn test_with_fill_keeps_id() {
        let circle = circle_at(Point::new(0.0, 0.0));
        let recolored = circle.with_fill(Rgba::white());
        assert_eq!(recolored.id(), circle.id());
        assert_eq!(recolored.fill_color, Rgba::white());
    }
}
