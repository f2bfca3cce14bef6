use crate::color::Color;
use crate::id_generator::ShapeId;

/// Published by a shape after an editor rewrote its attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeEvent {
    AttributesChanged { shape: ShapeId },
}

/// Published by a document when its shape sequence changes.
///
/// Ranges are inclusive indices. For `Removed` they are computed before the
/// shape leaves the document; for `Added` after it was appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    Added { first: usize, last: usize },
    Removed { first: usize, last: usize },
    Changed { first: usize, last: usize },
}

impl DocumentEvent {
    /// Inclusive index range carried by the event
    pub fn range(&self) -> (usize, usize) {
        match *self {
            Self::Added { first, last }
            | Self::Removed { first, last }
            | Self::Changed { first, last } => (first, last),
        }
    }
}

/// Published by a colour provider when its current colour changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorEvent {
    Changed { old: Color, new: Color },
}

/// Published by the object list model, in list-widget vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    IntervalAdded { first: usize, last: usize },
    IntervalRemoved { first: usize, last: usize },
    ContentsChanged { first: usize, last: usize },
}

impl From<DocumentEvent> for ListEvent {
    fn from(event: DocumentEvent) -> Self {
        match event {
            DocumentEvent::Added { first, last } => Self::IntervalAdded { first, last },
            DocumentEvent::Removed { first, last } => Self::IntervalRemoved { first, last },
            DocumentEvent::Changed { first, last } => Self::ContentsChanged { first, last },
        }
    }
}
