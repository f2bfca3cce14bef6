use egui::{Pos2, Response, Stroke, Vec2};

use crate::config::EditorConfig;
use crate::document::Document;
use crate::element::{Circle, FilledCircle, Line, ShapeVisitor};
use crate::error::DrawResult;
use crate::geometry::Point;
use crate::tools::ShapeTool;

/// Collects egui shapes for every visited shape, offset by the canvas origin
#[derive(Debug)]
pub struct CanvasPainter {
    origin: Vec2,
    stroke_width: f32,
    shapes: Vec<egui::Shape>,
}

impl CanvasPainter {
    pub fn new(origin: Pos2, stroke_width: f32) -> Self {
        Self {
            origin: origin.to_vec2(),
            stroke_width,
            shapes: Vec::new(),
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        point.to_pos2() + self.origin
    }

    fn stroke(&self, color: crate::color::Color) -> Stroke {
        Stroke::new(self.stroke_width, color.to_color32())
    }

    /// The egui shapes collected so far, in paint order
    pub fn into_shapes(self) -> Vec<egui::Shape> {
        self.shapes
    }
}

impl ShapeVisitor for CanvasPainter {
    fn visit_line(&mut self, line: &Line) {
        let points = [self.to_screen(line.start), self.to_screen(line.end)];
        self.shapes.push(egui::Shape::line_segment(points, self.stroke(line.color)));
    }

    fn visit_circle(&mut self, circle: &Circle) {
        self.shapes.push(egui::Shape::circle_stroke(
            self.to_screen(circle.center),
            circle.radius() as f32,
            self.stroke(circle.color),
        ));
    }

    fn visit_filled_circle(&mut self, filled: &FilledCircle) {
        self.shapes.push(egui::Shape::circle_filled(
            self.to_screen(filled.center()),
            filled.radius() as f32,
            filled.fill.to_color32(),
        ));
        self.visit_circle(&filled.outline);
    }
}

/// Paint the canvas background, every shape in document order, then the
/// placement preview on top.
pub fn paint_canvas(
    painter: &egui::Painter,
    canvas_rect: egui::Rect,
    document: &Document,
    tool: Option<&ShapeTool>,
    config: &EditorConfig,
) {
    painter.rect_filled(canvas_rect, 0.0, config.canvas_color.to_color32());
    painter.extend(canvas_shapes(canvas_rect.min, document, tool, config));
}

/// The egui shapes [`paint_canvas`] draws over the background
pub fn canvas_shapes(
    origin: Pos2,
    document: &Document,
    tool: Option<&ShapeTool>,
    config: &EditorConfig,
) -> Vec<egui::Shape> {
    let mut canvas_painter = CanvasPainter::new(origin, config.stroke_width);
    document.accept_all(&mut canvas_painter);
    if let Some(preview) = tool.and_then(ShapeTool::preview) {
        preview.accept(&mut canvas_painter);
    }
    canvas_painter.into_shapes()
}

/// Feed canvas clicks and pointer moves to the tool.
/// Returns true when the canvas should be repainted.
pub fn handle_canvas_input(
    response: &Response,
    origin: Pos2,
    tool: &mut ShapeTool,
    document: &Document,
) -> DrawResult<bool> {
    let to_canvas = |pos: Pos2| Point::from_pos2(pos - origin.to_vec2());

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            tool.on_click(to_canvas(pos), document)?;
            return Ok(true);
        }
    }

    Ok(response
        .hover_pos()
        .is_some_and(|pos| tool.on_pointer_move(to_canvas(pos))))
}
