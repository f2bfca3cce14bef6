use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

mod list_model;

pub use list_model::{ListAction, ObjectListModel};

use crate::element::{ShapeRef, ShapeVisitor};
use crate::error::{DrawError, DrawResult};
use crate::event::{DocumentEvent, EventBus, EventHandler, ShapeEvent, SubscriptionId};
use crate::format::Serializer;
use crate::geometry::Rect;
use crate::id_generator::ShapeId;
use crate::renderer::BoundingBoxCalculator;

/// Move a shape one position toward the front of the list (higher index, painted later)
pub const SHIFT_UP: i32 = 1;
/// Move a shape one position toward the back of the list (lower index, painted earlier)
pub const SHIFT_DOWN: i32 = -1;

struct Entry {
    shape: ShapeRef,
    // The document's registration on the shape, dropped when the shape leaves
    subscription: SubscriptionId,
}

struct DocumentInner {
    entries: RefCell<Vec<Entry>>,
    listeners: EventBus<DocumentEvent>,
}

impl DocumentInner {
    fn index_of_id(&self, id: ShapeId) -> Option<usize> {
        self.entries.borrow().iter().position(|entry| entry.shape.id() == id)
    }

    fn shape_changed(&self, event: &ShapeEvent) {
        let ShapeEvent::AttributesChanged { shape } = *event;
        match self.index_of_id(shape) {
            Some(index) => self.listeners.emit(&DocumentEvent::Changed { first: index, last: index }),
            None => log::warn!("Change notification from shape {} that is not in the document", shape),
        }
    }
}

/// Ordered collection of shapes. Insertion order is paint order: later shapes
/// are drawn on top of earlier ones.
///
/// `Document` is a cheap handle; clones share the same shapes and listeners.
/// Every mutation notifies document listeners synchronously.
#[derive(Clone)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.len())
            .field("listeners", &self.inner.listeners)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(DocumentInner {
                entries: RefCell::new(Vec::new()),
                listeners: EventBus::new(),
            }),
        }
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> DrawResult<ShapeRef> {
        let entries = self.inner.entries.borrow();
        entries
            .get(index)
            .map(|entry| Rc::clone(&entry.shape))
            .ok_or(DrawError::Bounds { index, len: entries.len() })
    }

    /// Position of this exact shape instance, if present
    pub fn index_of(&self, shape: &ShapeRef) -> Option<usize> {
        self.inner
            .entries
            .borrow()
            .iter()
            .position(|entry| Rc::ptr_eq(&entry.shape, shape))
    }

    /// Snapshot of the shapes in paint order
    pub fn shapes(&self) -> Vec<ShapeRef> {
        self.inner
            .entries
            .borrow()
            .iter()
            .map(|entry| Rc::clone(&entry.shape))
            .collect()
    }

    /// Append a shape and start listening to its attribute changes.
    /// Returns the new index.
    pub fn add(&self, shape: ShapeRef) -> DrawResult<usize> {
        if self.index_of(&shape).is_some() {
            return Err(DrawError::precondition(format!(
                "shape {} is already in the document",
                shape.id()
            )));
        }

        let weak: Weak<DocumentInner> = Rc::downgrade(&self.inner);
        let subscription = shape.subscribe(move |event: &ShapeEvent| {
            if let Some(inner) = weak.upgrade() {
                inner.shape_changed(event);
            }
        });

        let index = {
            let mut entries = self.inner.entries.borrow_mut();
            entries.push(Entry { shape: Rc::clone(&shape), subscription });
            entries.len() - 1
        };

        log::debug!("Added {} {} at index {}", shape.element_type(), shape.id(), index);
        self.inner.listeners.emit(&DocumentEvent::Added { first: index, last: index });
        Ok(index)
    }

    /// Remove a shape. Listeners hear about the removal while the shape is still
    /// at its old index; afterwards the document stops listening to the shape.
    pub fn remove(&self, shape: &ShapeRef) -> DrawResult<()> {
        let index = self.index_of(shape).ok_or_else(|| {
            DrawError::precondition(format!("shape {} is not in the document", shape.id()))
        })?;

        self.inner.listeners.emit(&DocumentEvent::Removed { first: index, last: index });

        // A listener may have reordered the document while handling the event
        let index = self.index_of(shape).ok_or_else(|| {
            DrawError::precondition(format!("shape {} was removed by a listener", shape.id()))
        })?;
        let entry = self.inner.entries.borrow_mut().remove(index);
        entry.shape.unsubscribe(entry.subscription);

        log::debug!("Removed {} {} from index {}", shape.element_type(), shape.id(), index);
        Ok(())
    }

    /// Swap a shape with its neighbour. `offset` must be [`SHIFT_UP`] or [`SHIFT_DOWN`].
    /// Moving past either end of the list is a silent no-op.
    pub fn change_order(&self, shape: &ShapeRef, offset: i32) -> DrawResult<()> {
        if offset != SHIFT_UP && offset != SHIFT_DOWN {
            return Err(DrawError::precondition(format!(
                "shifting offset must be 1 or -1, was: {offset}"
            )));
        }

        let old_index = self.index_of(shape).ok_or_else(|| {
            DrawError::precondition(format!("shape {} is not in the document", shape.id()))
        })?;

        let Some(new_index) = old_index.checked_add_signed(offset as isize) else {
            return Ok(());
        };
        if new_index >= self.len() {
            return Ok(());
        }

        self.inner.entries.borrow_mut().swap(old_index, new_index);
        self.inner.listeners.emit(&DocumentEvent::Changed {
            first: old_index.min(new_index),
            last: old_index.max(new_index),
        });
        Ok(())
    }

    /// Replace the whole content, e.g. after loading a file.
    ///
    /// Emits a single `Removed` for the old range, then one `Added` per new shape.
    pub fn replace_all(&self, shapes: Vec<ShapeRef>) -> DrawResult<()> {
        let len = self.len();
        if len > 0 {
            self.inner.listeners.emit(&DocumentEvent::Removed { first: 0, last: len - 1 });
            let old: Vec<Entry> = self.inner.entries.borrow_mut().drain(..).collect();
            for entry in old {
                entry.shape.unsubscribe(entry.subscription);
            }
        }

        for shape in shapes {
            self.add(shape)?;
        }
        Ok(())
    }

    pub fn subscribe(&self, handler: impl EventHandler<DocumentEvent> + 'static) -> SubscriptionId {
        self.inner.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Visit every shape in paint order
    pub fn accept_all<V: ShapeVisitor + ?Sized>(&self, visitor: &mut V) {
        for shape in self.shapes() {
            shape.accept(visitor);
        }
    }

    /// The document in the line-based text format
    pub fn serialize(&self) -> String {
        let mut serializer = Serializer::new();
        self.accept_all(&mut serializer);
        serializer.take_text()
    }

    /// Union of all shape bounds, `None` for an empty document
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut calculator = BoundingBoxCalculator::new();
        self.accept_all(&mut calculator);
        calculator.take_bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::element::factory;
    use crate::geometry::Point;

    fn line(x: i32) -> ShapeRef {
        factory::create_line(Point::new(x, 0), Point::new(x + 1, 1), Color::RED)
    }

    fn recording(document: &Document) -> Rc<RefCell<Vec<DocumentEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        document.subscribe(move |event: &DocumentEvent| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_add_appends_and_notifies() {
        let document = Document::new();
        let events = recording(&document);

        let first = line(0);
        let second = line(1);
        assert_eq!(document.add(Rc::clone(&first)).unwrap(), 0);
        assert_eq!(document.add(Rc::clone(&second)).unwrap(), 1);

        assert_eq!(document.len(), 2);
        assert!(Rc::ptr_eq(&document.get(1).unwrap(), &second));
        assert_eq!(
            *events.borrow(),
            vec![
                DocumentEvent::Added { first: 0, last: 0 },
                DocumentEvent::Added { first: 1, last: 1 },
            ]
        );
    }

    #[test]
    fn test_add_same_instance_twice_is_rejected() {
        let document = Document::new();
        let shape = line(0);
        document.add(Rc::clone(&shape)).unwrap();
        assert!(matches!(document.add(shape), Err(DrawError::Precondition(_))));
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_get_out_of_range() {
        let document = Document::new();
        document.add(line(0)).unwrap();
        assert!(matches!(document.get(1), Err(DrawError::Bounds { index: 1, len: 1 })));
    }

    #[test]
    fn test_remove_notifies_before_removal() {
        let document = Document::new();
        let shapes: Vec<_> = (0..3).map(line).collect();
        for shape in &shapes {
            document.add(Rc::clone(shape)).unwrap();
        }

        let observed_len = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed_len);
        let handle = document.clone();
        document.subscribe(move |event: &DocumentEvent| {
            if let DocumentEvent::Removed { first, .. } = event {
                sink.borrow_mut().push((*first, handle.len()));
            }
        });

        document.remove(&shapes[1]).unwrap();
        assert_eq!(*observed_len.borrow(), vec![(1, 3)]);
        assert_eq!(document.len(), 2);
        assert_eq!(shapes[1].listener_count(), 0);
    }

    #[test]
    fn test_remove_absent_shape_is_rejected_without_notifying() {
        let document = Document::new();
        document.add(line(0)).unwrap();
        let events = recording(&document);

        let stranger = line(5);
        assert!(matches!(document.remove(&stranger), Err(DrawError::Precondition(_))));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_change_order_swaps_and_reports_range() {
        let document = Document::new();
        let shapes: Vec<_> = (0..3).map(line).collect();
        for shape in &shapes {
            document.add(Rc::clone(shape)).unwrap();
        }
        let events = recording(&document);

        document.change_order(&shapes[1], SHIFT_UP).unwrap();
        assert_eq!(document.index_of(&shapes[1]), Some(2));
        assert_eq!(document.index_of(&shapes[2]), Some(1));

        document.change_order(&shapes[1], SHIFT_DOWN).unwrap();
        assert_eq!(document.index_of(&shapes[1]), Some(1));

        assert_eq!(
            *events.borrow(),
            vec![
                DocumentEvent::Changed { first: 1, last: 2 },
                DocumentEvent::Changed { first: 1, last: 2 },
            ]
        );
    }

    #[test]
    fn test_change_order_at_extremes_is_noop() {
        let document = Document::new();
        let shapes: Vec<_> = (0..2).map(line).collect();
        for shape in &shapes {
            document.add(Rc::clone(shape)).unwrap();
        }
        let events = recording(&document);

        document.change_order(&shapes[0], SHIFT_DOWN).unwrap();
        document.change_order(&shapes[1], SHIFT_UP).unwrap();

        assert_eq!(document.index_of(&shapes[0]), Some(0));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_change_order_rejects_bad_offset() {
        let document = Document::new();
        let shape = line(0);
        document.add(Rc::clone(&shape)).unwrap();
        for offset in [0, 2, -2] {
            assert!(matches!(
                document.change_order(&shape, offset),
                Err(DrawError::Precondition(_))
            ));
        }
    }

    #[test]
    fn test_shape_change_republished_at_current_index() {
        let document = Document::new();
        let shapes: Vec<_> = (0..3).map(line).collect();
        for shape in &shapes {
            document.add(Rc::clone(shape)).unwrap();
        }
        document.change_order(&shapes[0], SHIFT_UP).unwrap();
        let events = recording(&document);

        shapes[0].notify_attribute_changed();
        assert_eq!(*events.borrow(), vec![DocumentEvent::Changed { first: 1, last: 1 }]);
    }

    #[test]
    fn test_removed_shape_no_longer_reaches_document() {
        let document = Document::new();
        let shape = line(0);
        document.add(Rc::clone(&shape)).unwrap();
        document.remove(&shape).unwrap();
        let events = recording(&document);

        shape.notify_attribute_changed();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_replace_all() {
        let document = Document::new();
        let old = line(0);
        document.add(Rc::clone(&old)).unwrap();
        document.add(line(1)).unwrap();
        let events = recording(&document);

        document.replace_all(vec![line(7)]).unwrap();

        assert_eq!(document.len(), 1);
        assert_eq!(old.listener_count(), 0);
        assert_eq!(
            *events.borrow(),
            vec![
                DocumentEvent::Removed { first: 0, last: 1 },
                DocumentEvent::Added { first: 0, last: 0 },
            ]
        );
    }

    #[test]
    fn test_bounding_box_of_empty_document() {
        assert_eq!(Document::new().bounding_box(), None);
    }
}
