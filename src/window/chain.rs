//! Ordered handler lists with first-responder-wins dispatch.

use std::fmt;

use super::event::Handled;

type Handler<E> = Box<dyn FnMut(&mut E)>;

/// Handlers invoked in registration order until one marks the event handled.
pub struct HandlerChain<E> {
    handlers: Vec<Handler<E>>,
}

impl<E: Handled> HandlerChain<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler; earlier handlers take priority.
    pub fn push(&mut self, handler: impl FnMut(&mut E) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run handlers until the event is handled. Returns whether it was.
    pub fn dispatch(&mut self, event: &mut E) -> bool {
        for handler in &mut self.handlers {
            if event.is_handled() {
                break;
            }
            handler(event);
        }
        event.is_handled()
    }
}

impl<E: Handled> Default for HandlerChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for HandlerChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
