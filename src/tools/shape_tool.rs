use super::ToolType;
use crate::color::{Color, ColorProvider};
use crate::document::Document;
use crate::element::{Shape, ShapeKind, ShapeRef};
use crate::error::DrawResult;
use crate::geometry::Point;

/// Progress of the two-click placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementState {
    #[default]
    Idle,
    StartPointSet {
        start: Point,
        /// Last pointer position, `None` until the pointer moves
        current: Option<Point>,
        /// Foreground colour captured at the last pointer move
        preview_color: Option<Color>,
    },
}

/// Places shapes with two clicks: the first fixes the start point, the second
/// (at a different point) commits the shape to the document.
#[derive(Debug)]
pub struct ShapeTool {
    tool_type: ToolType,
    state: PlacementState,
    foreground: ColorProvider,
    background: ColorProvider,
}

impl ShapeTool {
    pub fn new(tool_type: ToolType, foreground: ColorProvider, background: ColorProvider) -> Self {
        Self {
            tool_type,
            state: PlacementState::Idle,
            foreground,
            background,
        }
    }

    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    /// Switch the kind of shape being placed. A half-finished placement is dropped.
    pub fn set_tool_type(&mut self, tool_type: ToolType) {
        if self.tool_type != tool_type {
            log::debug!("Switching tool from {} to {}", self.tool_type, tool_type);
            self.tool_type = tool_type;
            self.reset();
        }
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = PlacementState::Idle;
    }

    /// A new shape with the providers' colours as they are right now
    pub fn clone_with_current_colors(&self, start: Point, end: Point) -> ShapeRef {
        self.clone_with_colors(start, end, None, None)
    }

    /// A new shape coloured by the overrides, falling back to the providers
    pub fn clone_with_colors(
        &self,
        start: Point,
        end: Point,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> ShapeRef {
        Shape::new(self.tool_type.build(
            start,
            end,
            foreground.unwrap_or_else(|| self.foreground.current_color()),
            background.unwrap_or_else(|| self.background.current_color()),
        ))
    }

    /// Handle a click on the canvas. Returns the committed shape, if any.
    pub fn on_click(&mut self, point: Point, document: &Document) -> DrawResult<Option<ShapeRef>> {
        match self.state {
            PlacementState::Idle => {
                self.state = PlacementState::StartPointSet {
                    start: point,
                    current: None,
                    preview_color: None,
                };
                Ok(None)
            }
            // Committing here would produce a zero-length line or zero-radius circle
            PlacementState::StartPointSet { start, .. } if start == point => Ok(None),
            PlacementState::StartPointSet { start, .. } => {
                let shape = self.clone_with_current_colors(start, point);
                document.add(shape.clone())?;
                self.state = PlacementState::Idle;
                log::debug!("Placed {}", shape);
                Ok(Some(shape))
            }
        }
    }

    /// Track the pointer for the preview. Returns true when the canvas needs a repaint.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        match &mut self.state {
            PlacementState::Idle => false,
            PlacementState::StartPointSet {
                current,
                preview_color,
                ..
            } => {
                *current = Some(point);
                *preview_color = Some(self.foreground.current_color());
                true
            }
        }
    }

    /// The shape as it would look if the next click landed on the pointer
    pub fn preview(&self) -> Option<ShapeKind> {
        match self.state {
            PlacementState::StartPointSet {
                start,
                current: Some(end),
                preview_color,
            } => {
                let fg = preview_color.unwrap_or_else(|| self.foreground.current_color());
                Some(self.tool_type.build(start, end, fg, self.background.current_color()))
            }
            _ => None,
        }
    }
}
