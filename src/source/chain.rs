//! Ordered chain of registered message handlers.
//!
//! The reference [`MessageSource`]: the host window procedure hands every
//! message to [`HandlerChain::route`], which offers it to each registered
//! handler in order until one consumes it.

use std::cell::RefCell;

use crate::events::MessageEvent;
use crate::handlers::HandlerRef;

use super::MessageSource;

/// Handler registry owned by the host.
///
/// Registration is unique per handler identity. Handlers are held weakly;
/// dead references are skipped and pruned during routing.
#[derive(Debug, Default)]
pub struct HandlerChain {
    handlers: RefCell<Vec<HandlerRef>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a message to every live handler in registration order.
    ///
    /// Returns the result of the first handler that reports the message as
    /// handled, or `None` when the host should fall back to default processing.
    pub fn route(&self, event: &MessageEvent) -> Option<i32> {
        // Handlers may register or unregister while we iterate.
        let snapshot = self.handlers.borrow().clone();
        let mut result = 0;
        let mut saw_dead = false;

        for handler_ref in &snapshot {
            let Some(handler) = handler_ref.upgrade() else {
                saw_dead = true;
                continue;
            };
            if handler.process_message(event, &mut result) {
                if saw_dead {
                    self.prune();
                }
                return Some(result);
            }
        }

        if saw_dead {
            self.prune();
        }
        None
    }

    /// Number of registered handlers, including any not yet pruned.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    pub fn contains(&self, handler: &HandlerRef) -> bool {
        self.handlers.borrow().iter().any(|h| h == handler)
    }

    fn prune(&self) {
        self.handlers.borrow_mut().retain(HandlerRef::is_valid);
    }
}

impl MessageSource for HandlerChain {
    fn add_handler(&self, handler: HandlerRef) {
        if !handler.is_valid() {
            return;
        }
        let mut handlers = self.handlers.borrow_mut();
        if !handlers.contains(&handler) {
            handlers.push(handler);
        }
    }

    fn remove_handler(&self, handler: &HandlerRef) {
        self.handlers.borrow_mut().retain(|h| h != handler);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::events::WindowHandle;
    use crate::handlers::MessageHandler;

    struct Fixed {
        consume: bool,
        value: i32,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn new(consume: bool, value: i32) -> Rc<Self> {
            Rc::new(Self {
                consume,
                value,
                calls: Cell::new(0),
            })
        }
    }

    impl MessageHandler for Fixed {
        fn process_message(&self, _event: &MessageEvent, result: &mut i32) -> bool {
            self.calls.set(self.calls.get() + 1);
            *result = self.value;
            self.consume
        }
    }

    fn event() -> MessageEvent {
        MessageEvent::bare(WindowHandle(1), 0x0100)
    }

    #[test]
    fn test_empty_chain_routes_nothing() {
        let chain = HandlerChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.route(&event()), None);
    }

    #[test]
    fn test_first_consumer_wins() {
        let chain = HandlerChain::new();
        let passive = Fixed::new(false, 1);
        let consumer = Fixed::new(true, 42);
        let late = Fixed::new(true, 7);
        chain.add_handler(HandlerRef::new(&passive));
        chain.add_handler(HandlerRef::new(&consumer));
        chain.add_handler(HandlerRef::new(&late));

        assert_eq!(chain.route(&event()), Some(42));
        assert_eq!(passive.calls.get(), 1);
        assert_eq!(consumer.calls.get(), 1);
        assert_eq!(late.calls.get(), 0);
    }

    #[test]
    fn test_registration_is_unique() {
        let chain = HandlerChain::new();
        let h = Fixed::new(false, 0);
        chain.add_handler(HandlerRef::new(&h));
        chain.add_handler(HandlerRef::new(&h));
        assert_eq!(chain.len(), 1);

        chain.remove_handler(&HandlerRef::new(&h));
        assert!(chain.is_empty());
    }

    #[test]
    fn test_dead_handlers_are_ignored_and_pruned() {
        let chain = HandlerChain::new();
        let dead = Fixed::new(true, 9);
        let dead_ref = HandlerRef::new(&dead);
        chain.add_handler(dead_ref.clone());
        drop(dead);
        assert_eq!(chain.len(), 1);

        chain.add_handler(dead_ref);
        assert_eq!(chain.len(), 1);

        assert_eq!(chain.route(&event()), None);
        assert!(chain.is_empty());
    }
}
