//! Allow-list filtered message dispatcher.
//!
//! The dispatcher registers itself with an upstream [`MessageSource`] and
//! relays every message whose code is on its allow-list to its observers,
//! in registration order.
//!
//! # Architecture
//!
//! ```text
//! MessageSource ──► Dispatcher::process_message()
//!                        │
//!                        ├─ is_allowed(code)?  no ──► return false
//!                        │
//!                        └─ yes ──► observer 1 ──► observer 2 ──► … ──► return false
//! ```
//!
//! The dispatcher is a relay, not a consumer: it always reports the message
//! as unhandled so the host keeps offering it to everyone else.
//!
//! # Allow-list policy
//!
//! Default-closed. An empty allow-list blocks every code, so a fresh or
//! cleared dispatcher forwards nothing.
//!
//! # Observer failures
//!
//! Each observer call runs under `catch_unwind`. A panicking observer is
//! logged and the remaining observers still receive the message.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use tracing::{debug, error, info, trace, warn};

use crate::codes;
use crate::config::ListenerConfig;
use crate::error::{ConfigError, ListenerError};
use crate::events::{Delivery, MessageEvent, WindowHandle};
use crate::source::{self, MessageSource, SourceLocator};

use super::handler::{HandlerRef, MessageHandler};

/// Filtered fan-out hub for raw window messages.
///
/// Created behind an `Rc` so it can register a weak reference to itself with
/// the message source. Not thread-safe: use it from the thread that pumps
/// the window's messages.
pub struct Dispatcher {
    self_ref: HandlerRef,
    locator: SourceLocator,
    /// The source we registered with. `Some` exactly while listening.
    registration: RefCell<Option<Rc<dyn MessageSource>>>,
    allowed: RefCell<HashSet<u32>>,
    observers: RefCell<Vec<HandlerRef>>,
    verbose: Cell<bool>,
}

impl Dispatcher {
    /// Create a dispatcher that listens on this thread's host chain.
    pub fn new() -> Rc<Self> {
        Self::with_locator(Box::new(source::host_source))
    }

    /// Create a dispatcher bound to a specific source.
    pub fn with_source(source: Rc<dyn MessageSource>) -> Rc<Self> {
        Self::with_locator(Box::new(move || Some(Rc::clone(&source))))
    }

    /// Create a dispatcher that acquires its source through `locator` each
    /// time it starts listening.
    pub fn with_locator(locator: SourceLocator) -> Rc<Self> {
        let dispatcher = Rc::new_cyclic(|weak: &Weak<Dispatcher>| {
            let weak: Weak<Dispatcher> = weak.clone();
            Dispatcher {
                self_ref: HandlerRef::from_weak(weak),
                locator,
                registration: RefCell::new(None),
                allowed: RefCell::new(HashSet::new()),
                observers: RefCell::new(Vec::new()),
                verbose: Cell::new(false),
            }
        });
        info!("Dispatcher constructed.");
        dispatcher
    }

    /// A non-owning reference to this dispatcher, e.g. to chain it as an
    /// observer of another dispatcher.
    pub fn handler_ref(&self) -> HandlerRef {
        self.self_ref.clone()
    }

    // === Listening ===

    /// Register with the message source.
    ///
    /// Failures are logged, never returned; see [`Self::try_start_listening`].
    pub fn start_listening(&self) {
        match self.try_start_listening() {
            Ok(()) => {}
            Err(e @ ListenerError::SourceUnavailable) => {
                error!(reason = e.as_label(), "Failed to acquire the message source: {e}.");
            }
            Err(e) => warn!(reason = e.as_label(), "{e}."),
        }
    }

    pub fn try_start_listening(&self) -> Result<(), ListenerError> {
        if self.is_listening() {
            return Err(ListenerError::AlreadyListening);
        }
        let source = (self.locator)().ok_or(ListenerError::SourceUnavailable)?;
        source.add_handler(self.self_ref.clone());
        *self.registration.borrow_mut() = Some(source);
        info!("Message listener started and registered with the message source.");
        Ok(())
    }

    /// Unregister from the message source. Redundant calls log a warning.
    pub fn stop_listening(&self) {
        if let Err(e) = self.try_stop_listening() {
            warn!(reason = e.as_label(), "{e}.");
        }
    }

    pub fn try_stop_listening(&self) -> Result<(), ListenerError> {
        let source = self
            .registration
            .borrow_mut()
            .take()
            .ok_or(ListenerError::NotListening)?;
        source.remove_handler(&self.self_ref);
        info!("Message listener stopped and unregistered from the message source.");
        Ok(())
    }

    pub fn is_listening(&self) -> bool {
        self.registration.borrow().is_some()
    }

    // === Allow-list ===

    pub fn allow(&self, code: u32) {
        self.allowed.borrow_mut().insert(code);
        info!(code, name = %codes::name(code), "Added allowed message type.");
    }

    /// Allow a message by its registry name, ignoring case.
    ///
    /// Returns `false` (and changes nothing) when the name is unknown.
    pub fn allow_name(&self, name: &str) -> bool {
        match codes::code_for_name(name) {
            Some(code) => {
                self.allow(code);
                true
            }
            None => {
                warn!(name, "Cannot allow unknown message name.");
                false
            }
        }
    }

    pub fn disallow(&self, code: u32) {
        self.allowed.borrow_mut().remove(&code);
        info!(code, name = %codes::name(code), "Removed allowed message type.");
    }

    pub fn clear_allowed(&self) {
        self.allowed.borrow_mut().clear();
        info!("Cleared all allowed message types.");
    }

    /// Default-closed: `false` for every code while the allow-list is empty.
    pub fn is_allowed(&self, code: u32) -> bool {
        let allowed = self.allowed.borrow();
        !allowed.is_empty() && allowed.contains(&code)
    }

    /// The allow-list in ascending order.
    pub fn allowed_codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self.allowed.borrow().iter().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Filter hook consulted before and during fan-out.
    pub fn should_process(&self, hwnd: WindowHandle, code: u32) -> bool {
        if self.verbose.get() {
            debug!(%hwnd, code, "Checking if message should be processed.");
        }
        self.is_allowed(code)
    }

    // === Observers ===

    /// Append an observer. Invalid references are ignored; duplicates are
    /// kept and receive one call per entry.
    pub fn add_observer(&self, observer: HandlerRef) {
        if !observer.is_valid() {
            return;
        }
        let mut observers = self.observers.borrow_mut();
        observers.retain(HandlerRef::is_valid);
        info!(observer = ?observer, "Message handler added.");
        observers.push(observer);
    }

    /// Remove every entry referring to `observer`. Invalid references are ignored.
    pub fn remove_observer(&self, observer: &HandlerRef) {
        if !observer.is_valid() {
            return;
        }
        self.observers.borrow_mut().retain(|o| o != observer);
        info!(observer = ?observer, "Message handler removed.");
    }

    pub fn remove_all_observers(&self) {
        self.observers.borrow_mut().clear();
        info!("All message handlers removed.");
    }

    /// Number of observer entries, counting duplicates.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    // === Diagnostics ===

    pub fn set_verbose_logging(&self, enabled: bool) {
        self.verbose.set(enabled);
        info!(
            "Verbose logging {}.",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    pub fn is_verbose_logging(&self) -> bool {
        self.verbose.get()
    }

    fn log_message_details(&self, event: &MessageEvent, context: &str) {
        if self.verbose.get() {
            let info = codes::lookup(event.code);
            trace!(
                hwnd = %event.hwnd,
                code = event.code,
                name = %info.name,
                description = %info.description,
                "{context}"
            );
        }
    }

    // === Delivery ===

    /// Deliver one message and report the outcome.
    ///
    /// `handled` is always `false`; `result` is whatever the observers wrote
    /// into the shared result slot (0 if none ran).
    pub fn deliver(&self, event: MessageEvent) -> Delivery {
        let mut result = 0;
        let handled = self.process_message(&event, &mut result);
        Delivery { handled, result }
    }

    fn forward(&self, observer: &dyn MessageHandler, event: &MessageEvent, result: &mut i32) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            observer.process_message(event, result)
        }));
        if let Err(payload) = outcome {
            error!(
                code = event.code,
                name = %codes::name(event.code),
                panic = %panic_message(payload.as_ref()),
                "Message handler panicked; continuing with the remaining handlers."
            );
        }
    }

    // === Configuration ===

    /// Replace the allow-list and verbose flag from `config`.
    ///
    /// Every selector is resolved before anything changes, so an invalid
    /// config leaves the dispatcher untouched.
    pub fn apply_config(&self, config: &ListenerConfig) -> Result<(), ConfigError> {
        let codes = config.resolve_allowed()?;

        self.clear_allowed();
        for code in codes {
            self.allow(code);
        }
        self.set_verbose_logging(config.verbose_logging);

        if config.listen_on_start && !self.is_listening() {
            self.start_listening();
        }
        Ok(())
    }
}

impl MessageHandler for Dispatcher {
    fn process_message(&self, event: &MessageEvent, result: &mut i32) -> bool {
        self.log_message_details(event, "Processing message");

        if !self.should_process(event.hwnd, event.code) {
            if self.verbose.get() {
                trace!(hwnd = %event.hwnd, code = event.code, "Message ignored.");
            }
            return false;
        }

        // Observers may add or remove observers while we iterate.
        let observers = self.observers.borrow().clone();
        for observer_ref in &observers {
            if observer_ref.same_as(&self.self_ref) {
                continue;
            }
            let Some(observer) = observer_ref.upgrade() else {
                continue;
            };
            if !self.should_process(event.hwnd, event.code) {
                continue;
            }
            self.log_message_details(event, "Forwarding message to handler");
            self.forward(observer.as_ref(), event, result);
        }

        false
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        if self.is_listening() {
            self.stop_listening();
        }
        self.remove_all_observers();
        self.clear_allowed();
        info!("Dispatcher destructed and cleaned up.");
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listening", &self.is_listening())
            .field("allowed", &self.allowed_codes())
            .field("observers", &self.observer_count())
            .field("verbose", &self.verbose.get())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::HandlerChain;

    fn unsourced() -> Rc<Dispatcher> {
        Dispatcher::with_locator(Box::new(|| None))
    }

    #[test]
    fn test_new_dispatcher_is_inactive_and_empty() {
        let d = unsourced();
        assert!(!d.is_listening());
        assert!(d.allowed_codes().is_empty());
        assert_eq!(d.observer_count(), 0);
        assert!(!d.is_verbose_logging());
    }

    #[test]
    fn test_start_without_source_stays_inactive() {
        let d = unsourced();
        assert_eq!(d.try_start_listening(), Err(ListenerError::SourceUnavailable));
        d.start_listening();
        assert!(!d.is_listening());
    }

    #[test]
    fn test_start_and_stop_report_redundant_calls() {
        let chain = Rc::new(HandlerChain::new());
        let d = Dispatcher::with_source(chain.clone());

        assert_eq!(d.try_start_listening(), Ok(()));
        assert_eq!(d.try_start_listening(), Err(ListenerError::AlreadyListening));
        assert_eq!(chain.len(), 1);

        assert_eq!(d.try_stop_listening(), Ok(()));
        assert_eq!(d.try_stop_listening(), Err(ListenerError::NotListening));
        assert!(chain.is_empty());
    }

    #[test]
    fn test_dispatcher_never_forwards_to_itself() {
        let d = unsourced();
        d.allow(0x0100);
        d.add_observer(d.handler_ref());
        assert_eq!(d.observer_count(), 1);

        // Would recurse forever if self were not skipped.
        let delivery = d.deliver(MessageEvent::bare(WindowHandle::NULL, 0x0100));
        assert!(!delivery.handled);
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn test_debug_output() {
        let d = unsourced();
        d.allow(0x0101);
        d.allow(0x0100);
        let text = format!("{d:?}");
        assert!(text.contains("listening: false"));
        assert!(text.contains("allowed: [256, 257]"));
    }
}
