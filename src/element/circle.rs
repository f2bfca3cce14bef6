use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Circle outline defined by its center and any point on the circumference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub edge: Point,
    pub color: Color,
}

impl Circle {
    pub fn new(center: Point, edge: Point, color: Color) -> Self {
        Self { center, edge, color }
    }

    /// Circle whose circumference point sits straight below the center
    pub fn with_radius(center: Point, radius: i32, color: Color) -> Self {
        Self::new(center, Point::new(center.x, center.y + radius), color)
    }

    /// Distance from center to the circumference point, truncated
    pub fn radius(&self) -> i32 {
        self.center.distance_to(self.edge)
    }

    /// Square of side `2 * radius` centered on the circle
    pub fn bounds(&self) -> Rect {
        Rect::square_around(self.center, self.radius())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle {}, {}", self.center, self.radius())
    }
}
