//! Raw message events flowing from the host into the relay.
//!
//! ```text
//! ┌─────────────────────┐
//! │  host window proc   │  (platform::windows::relay_wndproc)
//! └──────────┬──────────┘
//!            │ MessageEvent
//!            ▼
//! ┌─────────────────────┐
//! │    HandlerChain     │  (source)
//! └──────────┬──────────┘
//!            │ process_message()
//!            ▼
//! ┌─────────────────────┐      allow-list      ┌──────────────┐
//! │     Dispatcher      │ ───────────────────► │  observers   │
//! └─────────────────────┘      fan-out         └──────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: `MessageEvent`, `Delivery` and the opaque handle/parameter newtypes

pub mod types;

pub use types::{Delivery, LParam, MessageEvent, WParam, WindowHandle};
