//! Freehand stroke shape.

use super::{Rgba, ShapeId};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand stroke: the polyline a drag lays down point by point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: ShapeId,
    /// Points in draw order. Holds at least the pointer-down origin.
    pub points: Vec<Point>,
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width.
    pub width: f64,
}

impl Stroke {
    /// Create a single-point stroke at the pointer-down position.
    pub fn new(origin: Point, color: Rgba, width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![origin],
            color,
            width,
        }
    }

    /// Copy of this stroke with `point` appended. Earlier points and the
    /// identifier are untouched.
    pub fn extended(&self, point: Point) -> Self {
        let mut extended = self.clone();
        extended.points.push(point);
        extended
    }

    /// Number of points laid down so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        let Some((first, rest)) = self.points.split_first() else {
            return Rect::ZERO;
        };
        rest.iter()
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    /// Hit when the point lies within `tolerance` plus half the stroke
    /// width of any segment of the polyline.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let slack = tolerance + self.width / 2.0;
        if self.points.len() < 2 {
            return match self.points.first() {
                Some(p) => p.distance(point) <= slack,
                None => false,
            };
        }

        for window in self.points.windows(2) {
            let seg = window[1] - window[0];
            let to_point = point - window[0];
            let len_sq = seg.hypot2();
            if len_sq < f64::EPSILON {
                // Repeated point, treat the segment as a dot.
                if to_point.hypot() <= slack {
                    return true;
                }
                continue;
            }
            let t = (to_point.dot(seg) / len_sq).clamp(0.0, 1.0);
            let projection = window[0] + t * seg;
            if projection.distance(point) <= slack {
                return true;
            }
        }

        false
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_starts_at_origin() {
        let stroke = Stroke::new(Point::new(5.0, 7.0), Rgba::black(), 3.0);
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.points[0], Point::new(5.0, 7.0));
    }

    #[test]
    fn test_extended_appends_and_keeps_prefix() {
        let stroke = Stroke::new(Point::new(0.0, 0.0), Rgba::black(), 3.0);
        let id = stroke.id();

        let extended = stroke.extended(Point::new(10.0, 0.0));
        assert_eq!(extended.id(), id);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.points[0], stroke.points[0]);
        assert_eq!(extended.points[1], Point::new(10.0, 0.0));
        // The original is untouched.
        assert_eq!(stroke.len(), 1);
    }

    #[test]
    fn test_bounds() {
        let stroke = Stroke::new(Point::new(0.0, 0.0), Rgba::black(), 3.0)
            .extended(Point::new(100.0, 50.0))
            .extended(Point::new(50.0, 100.0));

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let stroke = Stroke::new(Point::new(0.0, 0.0), Rgba::black(), 2.0)
            .extended(Point::new(100.0, 0.0));

        assert!(stroke.hit_test(Point::new(50.0, 0.0), 5.0));
        assert!(stroke.hit_test(Point::new(50.0, 5.5), 5.0)); // Inside width slack
        assert!(!stroke.hit_test(Point::new(50.0, 20.0), 5.0));
    }

    #[test]
    fn test_hit_test_single_point() {
        let dot = Stroke::new(Point::new(10.0, 10.0), Rgba::black(), 4.0);
        assert!(dot.hit_test(Point::new(12.0, 10.0), 1.0));
        assert!(!dot.hit_test(Point::new(20.0, 10.0), 1.0));
    }

    #[test]
    fn test_to_path() {
        let stroke = Stroke::new(Point::new(0.0, 0.0), Rgba::black(), 3.0)
            .extended(Point::new(10.0, 0.0))
            .extended(Point::new(10.0, 10.0));
        assert_eq!(stroke.to_path().elements().len(), 3);
    }
}
