use image::{Rgb, RgbImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::config::EditorConfig;
use crate::document::Document;
use crate::element::{Circle, FilledCircle, Line, ShapeVisitor};
use crate::error::{DrawError, DrawResult};
use crate::geometry::Rect;

/// Paints shapes onto a tiny-skia pixmap
pub struct Rasterizer<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
    stroke: Stroke,
    anti_alias: bool,
}

impl<'a> Rasterizer<'a> {
    pub fn new(pixmap: &'a mut Pixmap, transform: Transform, config: &EditorConfig) -> Self {
        Self {
            pixmap,
            transform,
            stroke: Stroke {
                width: config.stroke_width,
                ..Default::default()
            },
            anti_alias: config.antialias,
        }
    }

    fn paint(&self, color: crate::color::Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = self.anti_alias;
        paint
    }
}

impl ShapeVisitor for Rasterizer<'_> {
    fn visit_line(&mut self, line: &Line) {
        let mut pb = PathBuilder::new();
        pb.move_to(line.start.x as f32, line.start.y as f32);
        pb.line_to(line.end.x as f32, line.end.y as f32);
        // Degenerate (zero-length) lines produce no path
        if let Some(path) = pb.finish() {
            let paint = self.paint(line.color);
            self.pixmap.stroke_path(&path, &paint, &self.stroke, self.transform, None);
        }
    }

    fn visit_circle(&mut self, circle: &Circle) {
        let path = PathBuilder::from_circle(
            circle.center.x as f32,
            circle.center.y as f32,
            circle.radius() as f32,
        );
        if let Some(path) = path {
            let paint = self.paint(circle.color);
            self.pixmap.stroke_path(&path, &paint, &self.stroke, self.transform, None);
        }
    }

    fn visit_filled_circle(&mut self, filled: &FilledCircle) {
        let center = filled.center();
        let path = PathBuilder::from_circle(center.x as f32, center.y as f32, filled.radius() as f32);
        if let Some(path) = path {
            let paint = self.paint(filled.fill);
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, self.transform, None);
        }
        self.visit_circle(&filled.outline);
    }
}

/// Accumulates the union of the bounds of every visited shape
#[derive(Debug, Default)]
pub struct BoundingBoxCalculator {
    bounds: Option<Rect>,
}

impl BoundingBoxCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    fn include(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            Some(current) => current.union(&rect),
            None => rect,
        });
    }

    /// Returns the accumulated box and resets to empty.
    /// `None` when nothing was visited since the last call.
    pub fn take_bounding_box(&mut self) -> Option<Rect> {
        self.bounds.take()
    }
}

impl ShapeVisitor for BoundingBoxCalculator {
    fn visit_line(&mut self, line: &Line) {
        self.include(line.bounds());
    }

    fn visit_circle(&mut self, circle: &Circle) {
        self.include(circle.bounds());
    }

    fn visit_filled_circle(&mut self, filled: &FilledCircle) {
        self.visit_circle(&filled.outline);
    }
}

/// Render the whole document onto an image sized to its bounding box.
///
/// The box corner becomes the image origin; the background is the canvas colour.
/// A box with a zero dimension is rendered one pixel thick.
pub fn render_document(document: &Document, config: &EditorConfig) -> DrawResult<RgbImage> {
    let bounds = document.bounding_box().ok_or(DrawError::EmptyDocument)?;
    let too_large = || DrawError::ImageTooLarge {
        width: bounds.width,
        height: bounds.height,
    };
    let width = u32::try_from(bounds.width.max(1)).map_err(|_| too_large())?;
    let height = u32::try_from(bounds.height.max(1)).map_err(|_| too_large())?;

    let mut pixmap = Pixmap::new(width, height).ok_or_else(too_large)?;
    pixmap.fill(config.canvas_color.to_skia());

    let transform = Transform::from_translate(-bounds.x as f32, -bounds.y as f32);
    let mut rasterizer = Rasterizer::new(&mut pixmap, transform, config);
    document.accept_all(&mut rasterizer);

    log::debug!("Rendered {} shapes into {}x{} at {:?}", document.len(), width, height, bounds);
    Ok(pixmap_to_rgb(&pixmap))
}

/// Drop the alpha channel. The pixmap is opaque since it starts from a filled background.
pub fn pixmap_to_rgb(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let data = pixmap.data();
    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}
