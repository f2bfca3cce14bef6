use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::Color;
use crate::event::{ColorEvent, EventBus, EventHandler, SubscriptionId};

struct ProviderInner {
    name: &'static str,
    current: Cell<Color>,
    listeners: EventBus<ColorEvent>,
}

/// Shared handle to a user-selectable colour (foreground or background).
///
/// Clones refer to the same colour. Tools read the current value when a
/// shape is committed; listeners hear about every change.
#[derive(Clone)]
pub struct ColorProvider {
    inner: Rc<ProviderInner>,
}

impl fmt::Debug for ColorProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorProvider")
            .field("name", &self.inner.name)
            .field("current", &self.inner.current.get())
            .field("listeners", &self.inner.listeners)
            .finish()
    }
}

impl ColorProvider {
    pub fn new(name: &'static str, initial: Color) -> Self {
        Self {
            inner: Rc::new(ProviderInner {
                name,
                current: Cell::new(initial),
                listeners: EventBus::new(),
            }),
        }
    }

    pub fn current_color(&self) -> Color {
        self.inner.current.get()
    }

    /// Select a new colour. Listeners are only notified when the colour actually changes.
    pub fn set_color(&self, color: Color) {
        let old = self.inner.current.replace(color);
        if old != color {
            log::debug!("{} color changed: {} -> {}", self.inner.name, old, color);
            self.inner.listeners.emit(&ColorEvent::Changed { old, new: color });
        }
    }

    pub fn subscribe(&self, handler: impl EventHandler<ColorEvent> + 'static) -> SubscriptionId {
        self.inner.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

impl fmt::Display for ColorProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current_color(), f)
    }
}

/// Status-bar text describing the current foreground and background colours
pub struct ColorStatus {
    foreground: ColorProvider,
    background: ColorProvider,
    text: Rc<RefCell<String>>,
    subscriptions: [SubscriptionId; 2],
}

impl fmt::Debug for ColorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorStatus").field("text", &self.text.borrow()).finish()
    }
}

impl ColorStatus {
    pub fn new(foreground: ColorProvider, background: ColorProvider) -> Self {
        let text = Rc::new(RefCell::new(Self::describe(&foreground, &background)));

        let subscribe = |provider: &ColorProvider| {
            let text = Rc::clone(&text);
            let (fg, bg) = (foreground.clone(), background.clone());
            provider.subscribe(move |_: &ColorEvent| {
                *text.borrow_mut() = Self::describe(&fg, &bg);
            })
        };
        let subscriptions = [subscribe(&foreground), subscribe(&background)];

        Self {
            foreground,
            background,
            text,
            subscriptions,
        }
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn describe(foreground: &ColorProvider, background: &ColorProvider) -> String {
        format!("Foreground color: {foreground}, Background color: {background}.")
    }
}

impl Drop for ColorStatus {
    fn drop(&mut self) {
        self.foreground.unsubscribe(self.subscriptions[0]);
        self.background.unsubscribe(self.subscriptions[1]);
    }
}
