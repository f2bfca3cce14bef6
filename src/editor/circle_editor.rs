use super::{ShapeEditor, not_validated, parse_color, parse_coordinate, parse_radius};
use crate::color::Color;
use crate::element::{Circle, FilledCircle, ShapeKind, ShapeRef};
use crate::error::{DrawError, DrawResult};
use crate::geometry::Point;

/// Editor for the center, radius and outline colour of a circle
#[derive(Debug)]
pub struct CircleEditor {
    shape: ShapeRef,
    pub center_x: String,
    pub center_y: String,
    pub radius: String,
    pub color: String,
}

impl CircleEditor {
    pub fn new(shape: ShapeRef) -> Self {
        let kind = shape.kind();
        let center = kind.start_point();
        Self {
            center_x: center.x.to_string(),
            center_y: center.y.to_string(),
            radius: center.distance_to(kind.end_point()).to_string(),
            color: kind.fg_color().to_hex(),
            shape,
        }
    }

    /// The edited outline, with the circumference point straight below the center
    fn parse(&self) -> DrawResult<Circle> {
        let center = Point::new(
            parse_coordinate("center x", &self.center_x)?,
            parse_coordinate("center y", &self.center_y)?,
        );
        let radius = parse_radius("radius", &self.radius)?;
        let color = parse_color("color", &self.color)?;

        let edge_y = center.y.checked_add(radius).ok_or_else(|| {
            DrawError::Validation(format!("Circle at {center} with radius {radius} is too large"))
        })?;
        Ok(Circle::new(center, Point::new(center.x, edge_y), color))
    }
}

impl ShapeEditor for CircleEditor {
    fn title(&self) -> &'static str {
        "Edit circle"
    }

    fn shape(&self) -> &ShapeRef {
        &self.shape
    }

    fn fields_mut(&mut self) -> Vec<(&'static str, &mut String)> {
        vec![
            ("center x", &mut self.center_x),
            ("center y", &mut self.center_y),
            ("radius", &mut self.radius),
            ("color", &mut self.color),
        ]
    }

    fn validate(&self) -> DrawResult<()> {
        self.parse().map(|_| ())
    }

    fn commit(&mut self) -> DrawResult<()> {
        let circle = self.parse().map_err(|err| not_validated(self.title(), err))?;
        self.shape.set_kind(ShapeKind::Circle(circle));
        self.shape.notify_attribute_changed();
        Ok(())
    }
}

/// Circle editor with an extra background colour field
#[derive(Debug)]
pub struct FilledCircleEditor {
    pub outline: CircleEditor,
    pub fill: String,
}

impl FilledCircleEditor {
    pub fn new(shape: ShapeRef) -> Self {
        let fill = shape.kind().bg_color().unwrap_or(Color::BLACK).to_hex();
        Self {
            outline: CircleEditor::new(shape),
            fill,
        }
    }

    fn parse(&self) -> DrawResult<FilledCircle> {
        let outline = self.outline.parse()?;
        let fill = parse_color("fill", &self.fill)?;
        Ok(FilledCircle { outline, fill })
    }
}

impl ShapeEditor for FilledCircleEditor {
    fn title(&self) -> &'static str {
        "Edit filled circle"
    }

    fn shape(&self) -> &ShapeRef {
        self.outline.shape()
    }

    fn fields_mut(&mut self) -> Vec<(&'static str, &mut String)> {
        let mut fields = self.outline.fields_mut();
        fields.push(("fill", &mut self.fill));
        fields
    }

    fn validate(&self) -> DrawResult<()> {
        self.parse().map(|_| ())
    }

    fn commit(&mut self) -> DrawResult<()> {
        let filled = self.parse().map_err(|err| not_validated(self.title(), err))?;
        let shape = self.shape();
        shape.set_kind(ShapeKind::FilledCircle(filled));
        shape.notify_attribute_changed();
        Ok(())
    }
}
