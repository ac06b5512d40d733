//! FFI glue for Win32 window messages.

pub mod types;

pub use types::message_event;
