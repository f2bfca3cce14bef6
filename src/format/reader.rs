use regex::Regex;
use std::sync::OnceLock;

use super::{CIRCLE_TAG, FILLED_CIRCLE_TAG, LINE_TAG};
use crate::color::Color;
use crate::element::{Circle, FilledCircle, Line, ShapeKind};
use crate::error::{DrawError, DrawResult};
use crate::geometry::Point;

struct Patterns {
    line: Regex,
    circle: Regex,
    filled_circle: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        line: Regex::new(r"^LINE( [0-9]+){7}$").expect("invalid regex pattern"),
        circle: Regex::new(r"^CIRCLE( [0-9]+){6}$").expect("invalid regex pattern"),
        filled_circle: Regex::new(r"^FCIRCLE( [0-9]+){9}$").expect("invalid regex pattern"),
    })
}

/// Numeric fields of a line that already matched its pattern
struct Fields<'a> {
    line_number: usize,
    values: std::str::SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(line_number: usize, text: &'a str) -> Self {
        let mut values = text.split_whitespace();
        // Skip the tag
        values.next();
        Self { line_number, values }
    }

    fn next_str(&mut self) -> DrawResult<&'a str> {
        self.values
            .next()
            .ok_or_else(|| DrawError::format(self.line_number, "Missing field"))
    }

    fn coordinate(&mut self) -> DrawResult<i32> {
        let value = self.next_str()?;
        value
            .parse()
            .map_err(|_| DrawError::format(self.line_number, format!("Coordinate out of range: {value}")))
    }

    fn point(&mut self) -> DrawResult<Point> {
        Ok(Point::new(self.coordinate()?, self.coordinate()?))
    }

    /// Center and radius, returned as the center and the point straight below it
    fn center_and_edge(&mut self) -> DrawResult<(Point, Point)> {
        let center = self.point()?;
        let radius = self.coordinate()?;
        if radius == 0 {
            return Err(DrawError::format(self.line_number, "Radius must be positive"));
        }
        let edge_y = center
            .y
            .checked_add(radius)
            .ok_or_else(|| DrawError::format(self.line_number, "Circle exceeds the coordinate range"))?;
        Ok((center, Point::new(center.x, edge_y)))
    }

    fn channel(&mut self) -> DrawResult<u8> {
        let value = self.next_str()?;
        value
            .parse()
            .map_err(|_| DrawError::format(self.line_number, format!("Color channel out of range: {value}")))
    }

    fn color(&mut self) -> DrawResult<Color> {
        Ok(Color::new(self.channel()?, self.channel()?, self.channel()?))
    }
}

/// Parse one line of the text format. `line_number` is 1-based and only used in errors.
///
/// A circle's circumference point is placed straight below its center.
pub fn parse_line(line_number: usize, text: &str) -> DrawResult<ShapeKind> {
    let patterns = patterns();
    let mut fields = Fields::new(line_number, text);

    if patterns.line.is_match(text) {
        let start = fields.point()?;
        let end = fields.point()?;
        let color = fields.color()?;
        Ok(Line::new(start, end, color).into())
    } else if patterns.circle.is_match(text) {
        let (center, edge) = fields.center_and_edge()?;
        let color = fields.color()?;
        Ok(Circle::new(center, edge, color).into())
    } else if patterns.filled_circle.is_match(text) {
        let (center, edge) = fields.center_and_edge()?;
        let outline = fields.color()?;
        let fill = fields.color()?;
        Ok(FilledCircle::new(center, edge, outline, fill).into())
    } else {
        let tag = text.split_whitespace().next().unwrap_or_default();
        let message = if [LINE_TAG, CIRCLE_TAG, FILLED_CIRCLE_TAG].contains(&tag) {
            format!("Malformed {tag} definition: {text:?}")
        } else {
            format!("Unknown geometrical object: {text:?}")
        };
        Err(DrawError::format(line_number, message))
    }
}

/// Parse a whole document. Fails on the first malformed line.
pub fn parse_document(text: &str) -> DrawResult<Vec<ShapeKind>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}
