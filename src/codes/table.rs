//! Static table of well-known window message codes.
//!
//! Sorted by code and free of duplicates so lookups can binary search it.

/// One row of the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEntry {
    pub code: u32,
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(code: u32, name: &'static str, description: &'static str) -> MessageEntry {
    MessageEntry {
        code,
        name,
        description,
    }
}

/// Every named message, in ascending code order.
pub const MESSAGE_TABLE: &[MessageEntry] = &[
    entry(0x0000, "WM_NULL", "No operation."),
    entry(0x0001, "WM_CREATE", "Sent when a window is being created."),
    entry(0x0002, "WM_DESTROY", "Sent when a window is being destroyed."),
    entry(0x0003, "WM_MOVE", "Sent after a window has been moved."),
    entry(0x0005, "WM_SIZE", "Sent when the size of a window has changed."),
    entry(0x0006, "WM_ACTIVATE", "Sent when a window is activated or deactivated."),
    entry(0x0007, "WM_SETFOCUS", "Sent when a window receives keyboard focus."),
    entry(0x0008, "WM_KILLFOCUS", "Sent when a window loses keyboard focus."),
    entry(0x000A, "WM_ENABLE", "Sent when a window is enabled or disabled."),
    entry(0x000B, "WM_SETREDRAW", "Sent to allow changes in a window to be redrawn or not."),
    entry(0x000C, "WM_SETTEXT", "Sent to set the text of a window."),
    entry(0x000D, "WM_GETTEXT", "Sent to retrieve the text of a window."),
    entry(0x000E, "WM_GETTEXTLENGTH", "Sent to retrieve the length of the text in a window."),
    entry(0x0010, "WM_CLOSE", "Sent as a signal that a window or application should terminate."),
    entry(0x0011, "WM_QUERYENDSESSION", "Sent when the user chooses to end the session."),
    entry(0x0012, "WM_QUIT", "Sent to indicate a request to terminate an application."),
    entry(0x0013, "WM_QUERYOPEN", "Sent to determine whether a minimized window can be restored."),
    entry(0x0014, "WM_ERASEBKGND", "Sent when the background of a window must be erased."),
    entry(0x0015, "WM_SYSCOLORCHANGE", "Sent when the system colors change."),
    entry(0x0016, "WM_ENDSESSION", "Sent when the user session is ending."),
    entry(0x0100, "WM_KEYDOWN", "Sent when a key is pressed."),
    entry(0x0101, "WM_KEYUP", "Sent when a key is released."),
    entry(0x0102, "WM_CHAR", "Sent when a character is typed."),
    entry(0x0103, "WM_DEADCHAR", "Sent when a dead key is typed."),
    entry(0x0104, "WM_SYSKEYDOWN", "Sent when a system key is pressed."),
    entry(0x0105, "WM_SYSKEYUP", "Sent when a system key is released."),
    entry(0x0106, "WM_SYSCHAR", "Sent when a system character is typed."),
    entry(0x0107, "WM_SYSDEADCHAR", "Sent when a system dead key is typed."),
    entry(0x0200, "WM_MOUSEMOVE", "Sent when the mouse is moved."),
    entry(0x0201, "WM_LBUTTONDOWN", "Sent when the left mouse button is pressed."),
    entry(0x0202, "WM_LBUTTONUP", "Sent when the left mouse button is released."),
    entry(0x0203, "WM_LBUTTONDBLCLK", "Sent when the left mouse button is double-clicked."),
    entry(0x0204, "WM_RBUTTONDOWN", "Sent when the right mouse button is pressed."),
    entry(0x0205, "WM_RBUTTONUP", "Sent when the right mouse button is released."),
    entry(0x0206, "WM_RBUTTONDBLCLK", "Sent when the right mouse button is double-clicked."),
    entry(0x0207, "WM_MBUTTONDOWN", "Sent when the middle mouse button is pressed."),
    entry(0x0208, "WM_MBUTTONUP", "Sent when the middle mouse button is released."),
    entry(0x0209, "WM_MBUTTONDBLCLK", "Sent when the middle mouse button is double-clicked."),
    entry(0x020A, "WM_MOUSEWHEEL", "Sent when the mouse wheel is rotated."),
    entry(0x020B, "WM_XBUTTONDOWN", "Sent when an X button is pressed."),
    entry(0x020C, "WM_XBUTTONUP", "Sent when an X button is released."),
    entry(0x020D, "WM_XBUTTONDBLCLK", "Sent when an X button is double-clicked."),
    entry(0x0210, "WM_PARENTNOTIFY", "Sent to a parent window when a child window is created or destroyed."),
    entry(0x0211, "WM_ENTERMENULOOP", "Sent when a menu modal loop is entered."),
    entry(0x0212, "WM_EXITMENULOOP", "Sent when a menu modal loop is exited."),
    entry(0x0213, "WM_NEXTMENU", "Sent when the user navigates to the next menu."),
    entry(0x0214, "WM_SIZING", "Sent when the user is resizing a window."),
    entry(0x0215, "WM_CAPTURECHANGED", "Sent when the mouse capture changes."),
    entry(0x0216, "WM_MOVING", "Sent when the user is moving a window."),
    entry(0x0218, "WM_POWERBROADCAST", "Sent to notify applications of power management events."),
    entry(0x0219, "WM_DEVICECHANGE", "Sent when a device is added or removed."),
    entry(0x0300, "WM_CUT", "Sent to cut the current selection to the clipboard."),
    entry(0x0301, "WM_COPY", "Sent to copy the current selection to the clipboard."),
    entry(0x0302, "WM_PASTE", "Sent to paste data from the clipboard."),
    entry(0x0303, "WM_CLEAR", "Sent to clear the current selection."),
    entry(0x0304, "WM_UNDO", "Sent to undo the last action."),
    entry(0x0400, "WM_USER", "Base value for user-defined messages."),
    entry(0x8000, "WM_APP", "Base value for application-defined messages."),
];

/// Find the row for an exact code.
pub fn find(code: u32) -> Option<&'static MessageEntry> {
    MESSAGE_TABLE
        .binary_search_by_key(&code, |e| e.code)
        .ok()
        .map(|idx| &MESSAGE_TABLE[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in MESSAGE_TABLE.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "{} (0x{:04X}) must sort before {} (0x{:04X})",
                pair[0].name,
                pair[0].code,
                pair[1].name,
                pair[1].code
            );
        }
    }

    #[test]
    fn test_names_are_unique_ignoring_case() {
        for (i, a) in MESSAGE_TABLE.iter().enumerate() {
            for b in &MESSAGE_TABLE[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate {}", a.name);
            }
        }
    }

    #[test]
    fn test_table_size() {
        assert_eq!(MESSAGE_TABLE.len(), 58);
    }

    #[test]
    fn test_find_exact_codes() {
        assert_eq!(find(0x0000).map(|e| e.name), Some("WM_NULL"));
        assert_eq!(find(0x0304).map(|e| e.name), Some("WM_UNDO"));
        assert_eq!(find(0x8000).map(|e| e.name), Some("WM_APP"));
        assert!(find(0x0004).is_none());
    }

    #[test]
    fn test_all_entries_have_descriptions() {
        for e in MESSAGE_TABLE {
            assert!(!e.description.is_empty(), "{} has no description", e.name);
        }
    }
}
