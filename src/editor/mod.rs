use std::rc::Rc;

mod circle_editor;
mod line_editor;

pub use circle_editor::{CircleEditor, FilledCircleEditor};
pub use line_editor::LineEditor;

use crate::color::Color;
use crate::element::{Shape, ShapeKind, ShapeRef};
use crate::error::{DrawError, DrawResult};

/// Text-field editor for the attributes of one shape.
///
/// Fields hold raw user input. `validate` must succeed before `commit`;
/// a successful commit rewrites the shape and notifies its listeners once.
pub trait ShapeEditor {
    /// Dialog title
    fn title(&self) -> &'static str;

    /// The shape being edited
    fn shape(&self) -> &ShapeRef;

    /// Labelled fields in display order
    fn fields_mut(&mut self) -> Vec<(&'static str, &mut String)>;

    /// Check every field, reporting the first malformed one
    fn validate(&self) -> DrawResult<()>;

    /// Write the fields back into the shape.
    ///
    /// Calling this with fields that do not validate is a caller bug and
    /// returns a precondition error without touching the shape.
    fn commit(&mut self) -> DrawResult<()>;

    /// Replace the content of the field with the given label
    fn set_field(&mut self, label: &str, value: &str) -> DrawResult<()> {
        let title = self.title();
        let (_, field) = self
            .fields_mut()
            .into_iter()
            .find(|(name, _)| *name == label)
            .ok_or_else(|| DrawError::precondition(format!("{title} has no field {label:?}")))?;
        *field = value.to_string();
        Ok(())
    }
}

impl Shape {
    /// An editor pre-filled from this shape's current attributes
    pub fn create_editor(self: &Rc<Self>) -> Box<dyn ShapeEditor> {
        let shape = Rc::clone(self);
        match self.kind() {
            ShapeKind::Line(_) => Box::new(LineEditor::new(shape)),
            ShapeKind::Circle(_) => Box::new(CircleEditor::new(shape)),
            ShapeKind::FilledCircle(_) => Box::new(FilledCircleEditor::new(shape)),
        }
    }
}

/// A coordinate field: a non-negative integer
pub(crate) fn parse_coordinate(label: &str, value: &str) -> DrawResult<i32> {
    match value.parse::<i32>() {
        Ok(parsed) if parsed >= 0 => Ok(parsed),
        _ => Err(DrawError::Validation(format!("Invalid coordinate {label}: {value:?}"))),
    }
}

/// A radius field: a strictly positive integer
pub(crate) fn parse_radius(label: &str, value: &str) -> DrawResult<i32> {
    match value.parse::<i32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(DrawError::Validation(format!("Invalid radius {label}: {value:?}"))),
    }
}

pub(crate) fn parse_color(label: &str, value: &str) -> DrawResult<Color> {
    Color::from_hex(value)
        .map_err(|_| DrawError::Validation(format!("Invalid color string {label}: {value:?}")))
}

/// Turn a field error at commit time into the contract violation it is
pub(crate) fn not_validated(title: &str, err: DrawError) -> DrawError {
    log::warn!("{title} committed without a successful validation: {err}");
    DrawError::precondition(format!("{title} committed with invalid fields: {err}"))
}
