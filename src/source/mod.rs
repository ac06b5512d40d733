//! Upstream message sources.
//!
//! A message source is whatever delivers raw window messages: it keeps a
//! list of handlers and calls each one synchronously per message. The
//! [`Dispatcher`](crate::Dispatcher) registers itself with one while it is
//! listening.
//!
//! # Module Structure
//!
//! - [`chain`]: `HandlerChain`, the in-crate source implementation
//! - [`host`]: the thread-local host chain used by `relay_wndproc`

pub mod chain;
pub mod host;

use std::rc::Rc;

use crate::handlers::HandlerRef;

pub use chain::HandlerChain;
pub use host::{
    host_chain, host_source, install_host_chain, route, route_isolated,
    uninstall_host_chain,
};

/// The registration surface of an upstream message source.
pub trait MessageSource {
    fn add_handler(&self, handler: HandlerRef);
    fn remove_handler(&self, handler: &HandlerRef);
}

/// Acquires the source a dispatcher registers with.
///
/// Returns `None` while the host has not been initialized.
pub type SourceLocator = Box<dyn Fn() -> Option<Rc<dyn MessageSource>>>;
