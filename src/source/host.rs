//! Per-thread access to the host's handler chain.
//!
//! The window procedure runs on the thread that created the window, so the
//! host chain is thread-local rather than process-wide. It must be installed
//! once via `install_host_chain()` before a [`Dispatcher`](crate::Dispatcher)
//! built with `Dispatcher::new()` can start listening.
//!
//! # Example
//!
//! ```
//! use winmsg_relay::source;
//! use winmsg_relay::{MessageEvent, WindowHandle};
//!
//! assert!(source::host_source().is_none());
//!
//! source::install_host_chain();
//! assert!(source::host_source().is_some());
//!
//! // Nothing registered yet, so the host falls back to default processing.
//! let event = MessageEvent::bare(WindowHandle::NULL, 0x0100);
//! assert_eq!(source::route(&event), None);
//! ```

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::events::MessageEvent;

use super::{HandlerChain, MessageSource};

thread_local! {
    static HOST_CHAIN: RefCell<Option<Rc<HandlerChain>>> = const { RefCell::new(None) };
}

/// Install the host chain for this thread, returning it.
///
/// Idempotent: a second call returns the chain that is already installed.
pub fn install_host_chain() -> Rc<HandlerChain> {
    HOST_CHAIN.with(|slot| {
        let mut slot = slot.borrow_mut();
        let chain = slot.get_or_insert_with(|| {
            tracing::info!("Host message chain installed.");
            Rc::new(HandlerChain::new())
        });
        Rc::clone(chain)
    })
}

/// Remove this thread's host chain.
///
/// Dispatchers that are still registered keep their own handle to the old
/// chain and unregister from it normally.
pub fn uninstall_host_chain() {
    let removed = HOST_CHAIN.with(|slot| slot.borrow_mut().take());
    if removed.is_some() {
        tracing::info!("Host message chain uninstalled.");
    }
}

/// This thread's host chain, if installed.
pub fn host_chain() -> Option<Rc<HandlerChain>> {
    HOST_CHAIN.with(|slot| slot.borrow().clone())
}

/// This thread's host chain as a [`MessageSource`].
pub fn host_source() -> Option<Rc<dyn MessageSource>> {
    host_chain().map(|chain| chain as Rc<dyn MessageSource>)
}

/// Route a message through this thread's host chain.
///
/// Returns `None` when no chain is installed or nobody handled the message.
pub fn route(event: &MessageEvent) -> Option<i32> {
    // Clone out of the slot so handlers may reach the chain re-entrantly.
    let chain = host_chain()?;
    chain.route(event)
}

/// Like [`route`], but a panicking handler is logged and reported as
/// unhandled instead of unwinding into the caller.
///
/// Used by window procedures, where unwinding across `extern "system"`
/// aborts the process.
pub fn route_isolated(event: &MessageEvent) -> Option<i32> {
    match panic::catch_unwind(AssertUnwindSafe(|| route(event))) {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(
                code = event.code,
                hwnd = %event.hwnd,
                "Host message handler panicked; falling back to default processing."
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each #[test] runs on its own thread, so the thread-local chain starts
    // out empty in every test.

    #[test]
    fn test_no_chain_before_install() {
        assert!(host_chain().is_none());
        assert!(host_source().is_none());
    }

    #[test]
    fn test_install_is_idempotent() {
        let a = install_host_chain();
        let b = install_host_chain();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_uninstall_clears_slot() {
        install_host_chain();
        uninstall_host_chain();
        assert!(host_chain().is_none());
        uninstall_host_chain();
    }

    struct Exploding;

    impl crate::handlers::MessageHandler for Exploding {
        fn process_message(&self, _event: &MessageEvent, _result: &mut i32) -> bool {
            panic!("handler exploded");
        }
    }

    #[test]
    fn test_isolated_route_survives_panicking_handler() {
        let chain = install_host_chain();
        let exploding = Rc::new(Exploding);
        chain.add_handler(crate::handlers::HandlerRef::new(&exploding));

        let event = MessageEvent::bare(crate::events::WindowHandle::NULL, 0x0100);
        assert_eq!(route_isolated(&event), None);
        // Chain is still usable afterwards.
        assert_eq!(chain.len(), 1);
        uninstall_host_chain();
    }

    #[test]
    fn test_route_without_chain() {
        uninstall_host_chain();
        let event = MessageEvent::bare(crate::events::WindowHandle::NULL, 0x0010);
        assert_eq!(route(&event), None);
    }
}
