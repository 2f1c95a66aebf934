//! Shape definitions for the drawing surface.

mod circle;
mod rectangle;
mod stroke;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use stroke::Stroke;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// RGBA8 color, serialized as a CSS-style hex literal (`"#rrggbb"`,
/// with `"#rrggbbaa"` when not fully opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                // Short form: each digit doubles, so "f" means 0xff.
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?, 255))
            }
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Hex literal form, alpha included only when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color literal {hex:?}")))
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Closed set of shapes the surface can author.
///
/// Persisted drawings serialize as JSON arrays of these, using serde's
/// default externally tagged representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Stroke(Stroke),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Stroke(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
        }
    }

    /// Bounding box in surface coordinates, normalized so negative
    /// rectangle extents still produce a well-formed rect.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Stroke(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    /// Check if a point (in surface coordinates) hits this shape.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Stroke(s) => s.hit_test(point, tolerance),
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Circle(s) => s.hit_test(point, tolerance),
        }
    }

    /// Path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Stroke(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
        }
    }

    /// Advance this shape to follow the pointer during its creating drag.
    ///
    /// Strokes grow by one point, rectangles stretch their far corner,
    /// circles resize their radius. The identifier is preserved, so the
    /// result can replace the original in a drawing.
    pub fn dragged_to(&self, point: Point) -> Shape {
        match self {
            Shape::Stroke(s) => Shape::Stroke(s.extended(point)),
            Shape::Rectangle(s) => Shape::Rectangle(s.resized_to(point)),
            Shape::Circle(s) => Shape::Circle(s.resized_to(point)),
        }
    }

    /// Copy of this shape with its fill replaced, identifier preserved.
    /// Strokes carry no fill and come back unchanged.
    pub fn recolored(&self, fill: Rgba) -> Shape {
        match self {
            Shape::Stroke(s) => Shape::Stroke(s.clone()),
            Shape::Rectangle(s) => Shape::Rectangle(s.with_fill(fill)),
            Shape::Circle(s) => Shape::Circle(s.with_fill(fill)),
        }
    }

    /// Whether this shape has a fill that `recolored` can replace.
    pub fn has_fill(&self) -> bool {
        !matches!(self, Shape::Stroke(_))
    }
}
