use super::{Circle, FilledCircle, Line};

/// An operation implemented once per shape kind.
///
/// Shapes call back into the matching method from [`ShapeKind::accept`](super::ShapeKind::accept),
/// so consumers never inspect the kind themselves. Painting, bounding-box
/// accumulation and serialization are all visitors.
pub trait ShapeVisitor {
    fn visit_line(&mut self, line: &Line);

    fn visit_circle(&mut self, circle: &Circle);

    fn visit_filled_circle(&mut self, filled_circle: &FilledCircle);
}
