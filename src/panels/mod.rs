mod canvas;

pub use canvas::{CanvasPainter, canvas_shapes, handle_canvas_input, paint_canvas};
