use std::fmt;
use std::rc::Rc;

use super::{Document, SHIFT_DOWN, SHIFT_UP};
use crate::element::ShapeRef;
use crate::error::DrawResult;
use crate::event::{DocumentEvent, EventBus, EventHandler, ListEvent, SubscriptionId};

/// Keyboard action on the selected row of the object list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Delete,
    MoveUp,
    MoveDown,
}

impl ListAction {
    pub fn offset(self) -> Option<i32> {
        match self {
            ListAction::Delete => None,
            ListAction::MoveUp => Some(SHIFT_UP),
            ListAction::MoveDown => Some(SHIFT_DOWN),
        }
    }
}

/// Read-only view of a [`Document`] for a list widget.
///
/// Republishes every document event as a [`ListEvent`] with the same range.
pub struct ObjectListModel {
    document: Document,
    listeners: Rc<EventBus<ListEvent>>,
    subscription: SubscriptionId,
}

impl ObjectListModel {
    pub fn new(document: &Document) -> Self {
        let listeners: Rc<EventBus<ListEvent>> = Rc::new(EventBus::new());
        let forward = Rc::clone(&listeners);
        let subscription = document.subscribe(move |event: &DocumentEvent| {
            forward.emit(&ListEvent::from(*event));
        });

        Self {
            document: document.clone(),
            listeners,
            subscription,
        }
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub fn element_at(&self, index: usize) -> DrawResult<ShapeRef> {
        self.document.get(index)
    }

    pub fn label_at(&self, index: usize) -> DrawResult<String> {
        Ok(self.document.get(index)?.to_string())
    }

    pub fn labels(&self) -> Vec<String> {
        self.document.shapes().iter().map(|shape| shape.to_string()).collect()
    }

    pub fn apply_action(&self, index: usize, action: ListAction) -> DrawResult<()> {
        let shape = self.document.get(index)?;
        log::debug!("List action {:?} on row {}", action, index);
        match action.offset() {
            None => self.document.remove(&shape),
            Some(offset) => self.document.change_order(&shape, offset),
        }
    }

    pub fn subscribe(&self, handler: impl EventHandler<ListEvent> + 'static) -> SubscriptionId {
        self.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl fmt::Debug for ObjectListModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectListModel")
            .field("len", &self.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl Drop for ObjectListModel {
    fn drop(&mut self) {
        self.document.unsubscribe(self.subscription);
    }
}
