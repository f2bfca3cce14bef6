mod shape_tool;

pub use shape_tool::{PlacementState, ShapeTool};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::element::{Circle, FilledCircle, Line, ShapeKind};
use crate::geometry::Point;

/// Which kind of shape the canvas places on click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolType {
    #[default]
    Line,
    Circle,
    FilledCircle,
}

impl ToolType {
    pub const ALL: [ToolType; 3] = [ToolType::Line, ToolType::Circle, ToolType::FilledCircle];

    pub fn name(self) -> &'static str {
        match self {
            ToolType::Line => "line",
            ToolType::Circle => "circle",
            ToolType::FilledCircle => "filled circle",
        }
    }

    /// The shape spanned by the two placement points. `bg` only applies to filled circles.
    pub fn build(self, start: Point, end: Point, fg: Color, bg: Color) -> ShapeKind {
        match self {
            ToolType::Line => Line::new(start, end, fg).into(),
            ToolType::Circle => Circle::new(start, end, fg).into(),
            ToolType::FilledCircle => FilledCircle::new(start, end, fg, bg).into(),
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
