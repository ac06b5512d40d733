//! Windows host bridge.
//!
//! Connects a real Win32 window procedure to the thread's
//! [`HandlerChain`](crate::source::HandlerChain):
//! - FFI conversions between `HWND`/`WPARAM`/`LPARAM` and the crate's newtypes
//! - `relay_wndproc`, a window procedure that routes through the host chain

pub mod ffi;
pub mod wndproc;

pub use ffi::message_event;
pub use wndproc::relay_wndproc;
