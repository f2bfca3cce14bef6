use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer canvas position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, truncated toward zero
    pub fn distance_to(self, other: Point) -> i32 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt() as i32
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }

    /// Rounds an egui position to the nearest integer point
    pub fn from_pos2(pos: Pos2) -> Self {
        Self::new(pos.x.round() as i32, pos.y.round() as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Stored in `i64` so that any union of boxes around `i32` points fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// The rectangle spanned by two corner points, in any order
    pub fn spanning(a: Point, b: Point) -> Self {
        let (ax, ay, bx, by) = (i64::from(a.x), i64::from(a.y), i64::from(b.x), i64::from(b.y));
        Self {
            x: ax.min(bx),
            y: ay.min(by),
            width: (ax - bx).abs(),
            height: (ay - by).abs(),
        }
    }

    /// The square of side `2 * radius` centered at `center`
    pub fn square_around(center: Point, radius: i32) -> Self {
        let radius = i64::from(radius);
        Self::new(
            i64::from(center.x) - radius,
            i64::from(center.y) - radius,
            2 * radius,
            2 * radius,
        )
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}
