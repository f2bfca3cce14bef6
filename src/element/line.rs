use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl Line {
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Axis-aligned rectangle spanning both endpoints
    pub fn bounds(&self) -> Rect {
        Rect::spanning(self.start, self.end)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}-{}", self.start, self.end)
    }
}
