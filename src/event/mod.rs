mod bus;
mod events;

pub use bus::{EventBus, SubscriptionId};
pub use events::{ColorEvent, DocumentEvent, ListEvent, ShapeEvent};

/// Receives events published on an [`EventBus`].
///
/// Handlers run synchronously on the publishing thread, in subscription order.
/// Any `Fn(&E)` closure is a handler.
pub trait EventHandler<E> {
    fn handle_event(&self, event: &E);
}

impl<E, F> EventHandler<E> for F
where
    F: Fn(&E),
{
    fn handle_event(&self, event: &E) {
        self(event)
    }
}
