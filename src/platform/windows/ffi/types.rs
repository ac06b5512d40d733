//! Conversions between Win32 message types and the crate's opaque newtypes.

use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};

use crate::events::{LParam, MessageEvent, WParam, WindowHandle};

impl From<HWND> for WindowHandle {
    fn from(hwnd: HWND) -> Self {
        WindowHandle(hwnd.0 as isize)
    }
}

impl From<WindowHandle> for HWND {
    fn from(handle: WindowHandle) -> Self {
        HWND(handle.0 as *mut std::ffi::c_void)
    }
}

impl From<WPARAM> for WParam {
    fn from(wparam: WPARAM) -> Self {
        WParam(wparam.0)
    }
}

impl From<WParam> for WPARAM {
    fn from(wparam: WParam) -> Self {
        WPARAM(wparam.0)
    }
}

impl From<LPARAM> for LParam {
    fn from(lparam: LPARAM) -> Self {
        LParam(lparam.0)
    }
}

impl From<LParam> for LPARAM {
    fn from(lparam: LParam) -> Self {
        LPARAM(lparam.0)
    }
}

/// Build a [`MessageEvent`] from raw window procedure arguments.
pub fn message_event(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> MessageEvent {
    MessageEvent::new(hwnd.into(), msg, wparam.into(), lparam.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_round_trips_through_hwnd() {
        let handle = WindowHandle(0x1234);
        let hwnd: HWND = handle.into();
        assert_eq!(WindowHandle::from(hwnd), handle);
    }

    #[test]
    fn test_message_event_from_raw_args() {
        let event = message_event(HWND(std::ptr::null_mut()), 0x0100, WPARAM(0x41), LPARAM(-1));
        assert!(event.hwnd.is_null());
        assert_eq!(event.wparam, WParam(0x41));
        assert_eq!(event.lparam, LParam(-1));
    }
}
