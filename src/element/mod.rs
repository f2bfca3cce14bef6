use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

mod circle;
mod filled_circle;
mod line;
mod visitor;

pub use circle::Circle;
pub use filled_circle::FilledCircle;
pub use line::Line;
pub use visitor::ShapeVisitor;

use crate::color::Color;
use crate::event::{EventBus, EventHandler, ShapeEvent, SubscriptionId};
use crate::geometry::Point;
use crate::id_generator::ShapeId;

/// The closed set of drawable shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line(Line),
    Circle(Circle),
    FilledCircle(FilledCircle),
}

impl ShapeKind {
    /// Invoke the visitor method matching this shape's kind
    pub fn accept<V: ShapeVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            ShapeKind::Line(line) => visitor.visit_line(line),
            ShapeKind::Circle(circle) => visitor.visit_circle(circle),
            ShapeKind::FilledCircle(filled) => visitor.visit_filled_circle(filled),
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            ShapeKind::Line(_) => "line",
            ShapeKind::Circle(_) => "circle",
            ShapeKind::FilledCircle(_) => "filled_circle",
        }
    }

    /// First endpoint of a line, center of a circle
    pub fn start_point(&self) -> Point {
        match self {
            ShapeKind::Line(line) => line.start,
            ShapeKind::Circle(circle) => circle.center,
            ShapeKind::FilledCircle(filled) => filled.outline.center,
        }
    }

    /// Second endpoint of a line, circumference point of a circle
    pub fn end_point(&self) -> Point {
        match self {
            ShapeKind::Line(line) => line.end,
            ShapeKind::Circle(circle) => circle.edge,
            ShapeKind::FilledCircle(filled) => filled.outline.edge,
        }
    }

    /// Outline colour
    pub fn fg_color(&self) -> Color {
        match self {
            ShapeKind::Line(line) => line.color,
            ShapeKind::Circle(circle) => circle.color,
            ShapeKind::FilledCircle(filled) => filled.outline.color,
        }
    }

    /// Fill colour, only filled circles have one
    pub fn bg_color(&self) -> Option<Color> {
        match self {
            ShapeKind::FilledCircle(filled) => Some(filled.fill),
            _ => None,
        }
    }
}

impl From<Line> for ShapeKind {
    fn from(line: Line) -> Self {
        ShapeKind::Line(line)
    }
}

impl From<Circle> for ShapeKind {
    fn from(circle: Circle) -> Self {
        ShapeKind::Circle(circle)
    }
}

impl From<FilledCircle> for ShapeKind {
    fn from(filled: FilledCircle) -> Self {
        ShapeKind::FilledCircle(filled)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Line(line) => fmt::Display::fmt(line, f),
            ShapeKind::Circle(circle) => fmt::Display::fmt(circle, f),
            ShapeKind::FilledCircle(filled) => fmt::Display::fmt(filled, f),
        }
    }
}

/// Shared handle to a shape placed in (or destined for) a document
pub type ShapeRef = Rc<Shape>;

/// A shape instance with identity and attribute-change listeners.
///
/// The geometry lives in a `Cell` so editors can rewrite it through a shared
/// handle while the document keeps its own reference.
pub struct Shape {
    id: ShapeId,
    kind: Cell<ShapeKind>,
    listeners: EventBus<ShapeEvent>,
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("kind", &self.kind.get())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl Shape {
    pub fn new(kind: impl Into<ShapeKind>) -> ShapeRef {
        Rc::new(Self {
            id: ShapeId::generate(),
            kind: Cell::new(kind.into()),
            listeners: EventBus::new(),
        })
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Copy of the current geometry and colours
    pub fn kind(&self) -> ShapeKind {
        self.kind.get()
    }

    pub fn element_type(&self) -> &'static str {
        self.kind.get().element_type()
    }

    /// Overwrite the attributes without notifying. Editors call
    /// [`notify_attribute_changed`](Self::notify_attribute_changed) afterwards.
    pub(crate) fn set_kind(&self, kind: ShapeKind) {
        self.kind.set(kind);
    }

    pub fn accept<V: ShapeVisitor + ?Sized>(&self, visitor: &mut V) {
        self.kind.get().accept(visitor);
    }

    /// Tell every listener, in registration order, that the attributes changed
    pub fn notify_attribute_changed(&self) {
        self.listeners.emit(&ShapeEvent::AttributesChanged { shape: self.id });
    }

    pub fn subscribe(&self, handler: impl EventHandler<ShapeEvent> + 'static) -> SubscriptionId {
        self.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind.get(), f)
    }
}

/// Factory functions for creating shapes with explicit attributes
pub mod factory {
    use super::*;

    pub fn create_line(start: Point, end: Point, color: Color) -> ShapeRef {
        Shape::new(Line::new(start, end, color))
    }

    pub fn create_circle(center: Point, edge: Point, color: Color) -> ShapeRef {
        Shape::new(Circle::new(center, edge, color))
    }

    pub fn create_filled_circle(center: Point, edge: Point, fg: Color, bg: Color) -> ShapeRef {
        Shape::new(FilledCircle::new(center, edge, fg, bg))
    }
}
