//! Message code constants and configuration defaults.
//!
//! This module contains the reserved message ranges, the fallback text for
//! unknown codes, and where the listener configuration lives on disk.

// === Reserved Message Ranges ===

/// Start of the private window class range (`WM_USER`).
pub const WM_USER_START: u32 = 0x0400;

/// End (exclusive) of the `WM_USER` range.
pub const WM_USER_END: u32 = 0x8000;

/// Start of the application-defined range (`WM_APP`).
pub const WM_APP_START: u32 = 0x8000;

/// End (exclusive) of the `WM_APP` range.
pub const WM_APP_END: u32 = 0xC000;

/// Base name used for synthesized `WM_USER + 0x..` names.
pub const WM_USER_BASE_NAME: &str = "WM_USER";

/// Base name used for synthesized `WM_APP + 0x..` names.
pub const WM_APP_BASE_NAME: &str = "WM_APP";

/// Description shared by every code in the `WM_USER` range.
pub const WM_USER_DESCRIPTION: &str = "Custom application-defined message (WM_USER).";

/// Description shared by every code in the `WM_APP` range.
pub const WM_APP_DESCRIPTION: &str = "Custom application-defined message (WM_APP).";

// === Unknown Codes ===

/// Name reported for codes outside the table and the reserved ranges.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Description reported for unknown codes.
pub const UNKNOWN_DESCRIPTION: &str = "No description available.";

// === Configuration ===

/// Directory under `%APPDATA%` holding the listener configuration.
pub const CONFIG_DIR_NAME: &str = "WinMsgRelay";

/// File name of the listener configuration.
pub const CONFIG_FILE_NAME: &str = "listener.json";

/// Prefix accepted for hexadecimal message selectors (`"0x0450"`).
pub const HEX_PREFIX: &str = "0x";
