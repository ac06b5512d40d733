//! Allow-list filtered relay for raw window messages.
//!
//! A [`Dispatcher`] registers with an upstream message source, checks each
//! incoming message code against its allow-list and forwards permitted
//! messages to its observers. The [`codes`] registry turns numeric message
//! codes into names and descriptions for logging.
//!
//! Everything outside [`platform`] is free of Win32 FFI so the whole relay
//! can be tested as normal integration tests on any OS.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use winmsg_relay::{Dispatcher, HandlerChain, HandlerRef, MessageEvent, MessageHandler, WindowHandle};
//!
//! struct KeyCounter(Cell<u32>);
//!
//! impl MessageHandler for KeyCounter {
//!     fn process_message(&self, _event: &MessageEvent, _result: &mut i32) -> bool {
//!         self.0.set(self.0.get() + 1);
//!         true
//!     }
//! }
//!
//! let chain = Rc::new(HandlerChain::new());
//! let dispatcher = Dispatcher::with_source(chain.clone());
//! dispatcher.start_listening();
//! dispatcher.allow_name("WM_KEYDOWN");
//!
//! let counter = Rc::new(KeyCounter(Cell::new(0)));
//! dispatcher.add_observer(HandlerRef::new(&counter));
//!
//! // The dispatcher relays but never consumes, so the host falls through.
//! assert_eq!(chain.route(&MessageEvent::bare(WindowHandle::NULL, 0x0100)), None);
//! assert_eq!(chain.route(&MessageEvent::bare(WindowHandle::NULL, 0x0101)), None);
//! assert_eq!(counter.0.get(), 1);
//! ```

pub mod codes;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod model;
pub mod platform;
pub mod source;

pub use codes::{code_for_name, lookup, CodeInfo};
pub use config::{ListenerConfig, MessageSelector};
pub use error::{ConfigError, ListenerError};
pub use events::{Delivery, LParam, MessageEvent, WParam, WindowHandle};
pub use handlers::{Dispatcher, HandlerRef, MessageHandler};
pub use source::{HandlerChain, MessageSource, SourceLocator};
