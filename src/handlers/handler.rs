//! The message handler interface and non-owning handler references.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::events::MessageEvent;

/// Anything that can receive a raw window message.
///
/// Implemented by the [`Dispatcher`](super::Dispatcher) itself and by every
/// downstream observer. Return `true` when the message was consumed; write
/// the window procedure result into `result` if it matters.
pub trait MessageHandler {
    fn process_message(&self, event: &MessageEvent, result: &mut i32) -> bool;
}

/// A non-owning reference to a [`MessageHandler`].
///
/// The referent is owned elsewhere. Once it has been dropped the reference
/// is invalid: it is ignored on registration and skipped on delivery.
/// Equality is identity of the referent.
#[derive(Clone)]
pub struct HandlerRef(Weak<dyn MessageHandler>);

impl HandlerRef {
    pub fn new<H: MessageHandler + 'static>(handler: &Rc<H>) -> Self {
        let weak: Weak<H> = Rc::downgrade(handler);
        Self(weak)
    }

    pub fn from_weak(weak: Weak<dyn MessageHandler>) -> Self {
        Self(weak)
    }

    /// True while the referent is alive.
    pub fn is_valid(&self) -> bool {
        self.0.strong_count() > 0
    }

    pub fn upgrade(&self) -> Option<Rc<dyn MessageHandler>> {
        self.0.upgrade()
    }

    /// Identity comparison, ignoring vtable metadata.
    pub fn same_as(&self, other: &HandlerRef) -> bool {
        std::ptr::addr_eq(self.0.as_ptr(), other.0.as_ptr())
    }
}

impl PartialEq for HandlerRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for HandlerRef {}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerRef")
            .field(&self.0.as_ptr().cast::<()>())
            .field(&self.is_valid())
            .finish()
    }
}

impl<H: MessageHandler + 'static> From<&Rc<H>> for HandlerRef {
    fn from(handler: &Rc<H>) -> Self {
        Self::new(handler)
    }
}
