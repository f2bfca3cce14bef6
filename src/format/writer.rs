use std::fmt::Write;

use super::{CIRCLE_TAG, FILLED_CIRCLE_TAG, LINE_TAG};
use crate::color::Color;
use crate::element::{Circle, FilledCircle, Line, ShapeKind, ShapeVisitor};

/// Appends one text-format line per visited shape
#[derive(Debug, Default)]
pub struct Serializer {
    buffer: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far and clears the buffer
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn push_color(&mut self, color: Color) {
        let _ = write!(self.buffer, " {} {} {}", color.r, color.g, color.b);
    }

    fn push_circle(&mut self, tag: &str, circle: &Circle) {
        let _ = write!(
            self.buffer,
            "{} {} {} {}",
            tag,
            circle.center.x,
            circle.center.y,
            circle.radius()
        );
        self.push_color(circle.color);
    }
}

// Writing into a String never fails, hence the ignored fmt::Results.
impl ShapeVisitor for Serializer {
    fn visit_line(&mut self, line: &Line) {
        let _ = write!(
            self.buffer,
            "{} {} {} {} {}",
            LINE_TAG, line.start.x, line.start.y, line.end.x, line.end.y
        );
        self.push_color(line.color);
        self.buffer.push('\n');
    }

    fn visit_circle(&mut self, circle: &Circle) {
        self.push_circle(CIRCLE_TAG, circle);
        self.buffer.push('\n');
    }

    fn visit_filled_circle(&mut self, filled: &FilledCircle) {
        self.push_circle(FILLED_CIRCLE_TAG, &filled.outline);
        self.push_color(filled.fill);
        self.buffer.push('\n');
    }
}

/// Text-format line for a single shape, including the trailing newline
pub fn serialize_shape(kind: &ShapeKind) -> String {
    let mut serializer = Serializer::new();
    kind.accept(&mut serializer);
    serializer.take_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_line() {
        let line = Line::new(Point::new(1, 2), Point::new(3, 4), Color::RED);
        assert_eq!(serialize_shape(&line.into()), "LINE 1 2 3 4 255 0 0\n");
    }

    #[test]
    fn test_circle_writes_truncated_radius() {
        let circle = Circle::new(Point::new(10, 10), Point::new(13, 12), Color::new(1, 2, 3));
        assert_eq!(serialize_shape(&circle.into()), "CIRCLE 10 10 3 1 2 3\n");
    }

    #[test]
    fn test_filled_circle_appends_fill() {
        let filled = FilledCircle::new(Point::new(5, 6), Point::new(5, 9), Color::RED, Color::BLUE);
        assert_eq!(serialize_shape(&filled.into()), "FCIRCLE 5 6 3 255 0 0 0 0 255\n");
    }

    #[test]
    fn test_take_text_resets() {
        let mut serializer = Serializer::new();
        ShapeKind::from(Line::new(Point::new(0, 0), Point::new(1, 1), Color::BLACK)).accept(&mut serializer);
        ShapeKind::from(Circle::with_radius(Point::new(4, 4), 2, Color::WHITE)).accept(&mut serializer);
        assert_eq!(
            serializer.take_text(),
            "LINE 0 0 1 1 0 0 0\nCIRCLE 4 4 2 255 255 255\n"
        );
        assert_eq!(serializer.take_text(), "");
    }
}
