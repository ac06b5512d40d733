//! Raw window message records.
//!
//! These types mirror the four arguments of a window procedure without
//! interpreting any of them. This module is pure Rust with no FFI
//! dependencies; `platform::windows` converts to and from the Win32 types.

use std::fmt;

/// Opaque window handle the message was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    /// The null handle (thread messages, tests).
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// First message parameter (`WPARAM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WParam(pub usize);

/// Second message parameter (`LPARAM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LParam(pub isize);

/// One raw message as delivered by the host. Never retained after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEvent {
    pub hwnd: WindowHandle,
    pub code: u32,
    pub wparam: WParam,
    pub lparam: LParam,
}

impl MessageEvent {
    pub fn new(hwnd: WindowHandle, code: u32, wparam: WParam, lparam: LParam) -> Self {
        Self {
            hwnd,
            code,
            wparam,
            lparam,
        }
    }

    /// A message with both parameters zeroed.
    pub fn bare(hwnd: WindowHandle, code: u32) -> Self {
        Self::new(hwnd, code, WParam(0), LParam(0))
    }
}

/// Outcome of delivering one message to a handler.
///
/// `handled == false` tells the host to keep offering the message to its
/// other handlers and finally to default processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delivery {
    pub handled: bool,
    pub result: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle() {
        assert!(WindowHandle::NULL.is_null());
        assert!(!WindowHandle(0x1234).is_null());
        assert_eq!(WindowHandle::default(), WindowHandle::NULL);
    }

    #[test]
    fn test_handle_display_is_hex() {
        assert_eq!(WindowHandle(0xBEEF).to_string(), "0xbeef");
    }

    #[test]
    fn test_bare_event_has_zero_params() {
        let event = MessageEvent::bare(WindowHandle(7), 0x0100);
        assert_eq!(event.wparam, WParam(0));
        assert_eq!(event.lparam, LParam(0));
        assert_eq!(event.code, 0x0100);
    }

    #[test]
    fn test_default_delivery_is_unhandled() {
        let delivery = Delivery::default();
        assert!(!delivery.handled);
        assert_eq!(delivery.result, 0);
    }
}
