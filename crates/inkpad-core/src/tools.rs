//! Tool selection and the settings captured into new shapes.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::shapes::{Circle, Rectangle, Rgba, Shape, Stroke};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    /// Freehand stroke, laid down point by point.
    #[default]
    Stroke,
    Rectangle,
    Circle,
    /// Click an existing shape to replace its fill.
    Recolor,
}

/// Smallest stroke width the toolbar offers.
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Largest stroke width the toolbar offers.
pub const MAX_STROKE_WIDTH: u32 = 20;

/// Settings the toolbar mutates. New shapes capture these at
/// pointer-down; changing them never touches shapes already drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Currently selected tool.
    pub tool: ToolKind,
    /// Outline color for new shapes.
    pub stroke_color: Rgba,
    /// Interior color for new rectangles and circles, and the color the
    /// recolor tool applies.
    pub fill_color: Rgba,
    /// Outline width for new shapes.
    pub stroke_width: u32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            stroke_color: Rgba::black(),
            fill_color: Rgba::red(),
            stroke_width: 3,
        }
    }
}

impl ToolSettings {
    /// Set the stroke width, clamped to the supported range.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    /// Build the shape a pointer-down with the current tool begins, or
    /// `None` when the tool acts on existing shapes instead.
    pub fn make_shape(&self, origin: Point) -> Option<Shape> {
        let width = f64::from(self.stroke_width);
        match self.tool {
            ToolKind::Stroke => Some(Shape::Stroke(Stroke::new(
                origin,
                self.stroke_color,
                width,
            ))),
            ToolKind::Rectangle => Some(Shape::Rectangle(Rectangle::new(
                origin,
                self.stroke_color,
                width,
                self.fill_color,
            ))),
            ToolKind::Circle => Some(Shape::Circle(Circle::new(
                origin,
                self.stroke_color,
                width,
                self.fill_color,
            ))),
            ToolKind::Recolor => None,
        }
    }
}
