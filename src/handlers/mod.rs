//! Message handlers and the filtering dispatcher.
//!
//! - [`handler`]: the `MessageHandler` trait and weak `HandlerRef`s
//! - [`dispatcher`]: `Dispatcher`, the allow-list gated fan-out hub

pub mod dispatcher;
pub mod handler;

pub use dispatcher::Dispatcher;
pub use handler::{HandlerRef, MessageHandler};
