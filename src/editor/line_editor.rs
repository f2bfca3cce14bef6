use super::{ShapeEditor, not_validated, parse_color, parse_coordinate};
use crate::element::{Line, ShapeKind, ShapeRef};
use crate::error::DrawResult;
use crate::geometry::Point;

/// Editor for both endpoints and the colour of a line
#[derive(Debug)]
pub struct LineEditor {
    shape: ShapeRef,
    pub start_x: String,
    pub start_y: String,
    pub end_x: String,
    pub end_y: String,
    pub color: String,
}

impl LineEditor {
    pub fn new(shape: ShapeRef) -> Self {
        let kind = shape.kind();
        let (start, end) = (kind.start_point(), kind.end_point());
        Self {
            start_x: start.x.to_string(),
            start_y: start.y.to_string(),
            end_x: end.x.to_string(),
            end_y: end.y.to_string(),
            color: kind.fg_color().to_hex(),
            shape,
        }
    }

    fn parse(&self) -> DrawResult<Line> {
        let start = Point::new(
            parse_coordinate("start x", &self.start_x)?,
            parse_coordinate("start y", &self.start_y)?,
        );
        let end = Point::new(
            parse_coordinate("end x", &self.end_x)?,
            parse_coordinate("end y", &self.end_y)?,
        );
        let color = parse_color("color", &self.color)?;
        Ok(Line::new(start, end, color))
    }
}

impl ShapeEditor for LineEditor {
    fn title(&self) -> &'static str {
        "Edit line"
    }

    fn shape(&self) -> &ShapeRef {
        &self.shape
    }

    fn fields_mut(&mut self) -> Vec<(&'static str, &mut String)> {
        vec![
            ("start x", &mut self.start_x),
            ("start y", &mut self.start_y),
            ("end x", &mut self.end_x),
            ("end y", &mut self.end_y),
            ("color", &mut self.color),
        ]
    }

    fn validate(&self) -> DrawResult<()> {
        self.parse().map(|_| ())
    }

    fn commit(&mut self) -> DrawResult<()> {
        let line = self.parse().map_err(|err| not_validated(self.title(), err))?;
        self.shape.set_kind(ShapeKind::Line(line));
        self.shape.notify_attribute_changed();
        Ok(())
    }
}
