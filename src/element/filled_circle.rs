use serde::{Deserialize, Serialize};
use std::fmt;

use super::Circle;
use crate::color::Color;
use crate::geometry::Point;

/// Circle with an interior fill. The outline is a plain [`Circle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledCircle {
    pub outline: Circle,
    pub fill: Color,
}

impl FilledCircle {
    pub fn new(center: Point, edge: Point, outline_color: Color, fill: Color) -> Self {
        Self {
            outline: Circle::new(center, edge, outline_color),
            fill,
        }
    }

    pub fn center(&self) -> Point {
        self.outline.center
    }

    pub fn radius(&self) -> i32 {
        self.outline.radius()
    }
}

impl fmt::Display for FilledCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Filled circle {}, {}, {}",
            self.center(),
            self.radius(),
            self.fill.to_hex()
        )
    }
}
