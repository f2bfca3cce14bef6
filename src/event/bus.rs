use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::event::EventHandler;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A simple event bus for broadcasting events to registered handlers
pub struct EventBus<E> {
    handlers: RefCell<Vec<(SubscriptionId, Rc<dyn EventHandler<E>>)>>,
    next_id: Cell<u64>,
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> EventBus<E> {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: impl EventHandler<E> + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let handler: Rc<dyn EventHandler<E>> = Rc::new(handler);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Remove a handler. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    /// Emit an event to all registered handlers.
    ///
    /// The handler list is snapshotted first, so handlers may subscribe or
    /// unsubscribe while the event is being delivered; such changes apply to
    /// the next emit.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Rc<dyn EventHandler<E>>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in snapshot {
            handler.handle_event(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }
}
