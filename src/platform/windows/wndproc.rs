//! Window procedure bridging Win32 into the thread's host chain.

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::DefWindowProcW;

use super::ffi::message_event;
use crate::source;

/// Window procedure for windows whose messages should pass through the relay.
///
/// Register it as `lpfnWndProc` after calling
/// [`install_host_chain`](crate::source::install_host_chain) on the UI thread.
/// Messages no handler consumes go to `DefWindowProcW`, as do messages whose
/// handler panicked (the panic is caught and logged).
pub extern "system" fn relay_wndproc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let event = message_event(hwnd, msg, wparam, lparam);
    match source::route_isolated(&event) {
        Some(result) => LRESULT(result as isize),
        None => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

#[cfg(test)]
mod tests {
    use windows::Win32::UI::WindowsAndMessaging::{
        WM_APP, WM_CLOSE, WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDOWN, WM_MOUSEWHEEL, WM_NULL, WM_PASTE,
        WM_USER,
    };

    use crate::codes;
    use crate::model::constants::*;

    #[test]
    fn test_table_matches_win32_constants() {
        let pairs = [
            (WM_NULL, "WM_NULL"),
            (WM_CLOSE, "WM_CLOSE"),
            (WM_KEYDOWN, "WM_KEYDOWN"),
            (WM_KEYUP, "WM_KEYUP"),
            (WM_LBUTTONDOWN, "WM_LBUTTONDOWN"),
            (WM_MOUSEWHEEL, "WM_MOUSEWHEEL"),
            (WM_PASTE, "WM_PASTE"),
        ];
        for (code, name) in pairs {
            assert_eq!(codes::name(code), name);
            assert_eq!(codes::code_for_name(name), Some(code));
        }
    }

    #[test]
    fn test_range_starts_match_win32_constants() {
        assert_eq!(WM_USER, WM_USER_START);
        assert_eq!(WM_APP, WM_APP_START);
    }
}
