//! Window message code registry.
//!
//! Translates numeric message codes into symbolic names and short
//! descriptions, and back. Used for diagnostics only: nothing here
//! influences which messages a [`crate::Dispatcher`] forwards.
//!
//! Resolution order for [`lookup`]:
//!
//! 1. `[WM_USER_START, WM_USER_END)` → `"WM_USER + 0x<offset>"`
//! 2. `[WM_APP_START, WM_APP_END)` → `"WM_APP + 0x<offset>"`
//! 3. exact match in the static table
//! 4. `"Unknown"`
//!
//! The range rules run first, so the range starts themselves resolve to
//! `"WM_USER + 0x0"` and `"WM_APP + 0x0"`. Their literal table rows still
//! make `code_for_name("WM_USER")` work.

pub mod table;

use std::borrow::Cow;
use std::fmt;

use crate::model::constants::*;

pub use table::{MessageEntry, MESSAGE_TABLE};

/// Name and description of a message code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInfo {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl CodeInfo {
    fn borrowed(name: &'static str, description: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
        }
    }

    /// The info reported for codes nobody knows about.
    pub fn unknown() -> Self {
        Self::borrowed(UNKNOWN_NAME, UNKNOWN_DESCRIPTION)
    }

    /// True for the `"Unknown"` fallback.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_NAME
    }
}

impl fmt::Display for CodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// A half-open block of codes reserved for caller-defined messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedRange {
    pub start: u32,
    pub end: u32,
    pub base_name: &'static str,
    pub description: &'static str,
}

impl ReservedRange {
    pub fn contains(&self, code: u32) -> bool {
        code >= self.start && code < self.end
    }

    /// Synthesize the info for a code inside this range.
    fn info_for(&self, code: u32) -> CodeInfo {
        CodeInfo {
            name: Cow::Owned(format!("{} + 0x{:X}", self.base_name, code - self.start)),
            description: Cow::Borrowed(self.description),
        }
    }
}

/// Reserved ranges, checked in this order before the static table.
pub const RESERVED_RANGES: [ReservedRange; 2] = [
    ReservedRange {
        start: WM_USER_START,
        end: WM_USER_END,
        base_name: WM_USER_BASE_NAME,
        description: WM_USER_DESCRIPTION,
    },
    ReservedRange {
        start: WM_APP_START,
        end: WM_APP_END,
        base_name: WM_APP_BASE_NAME,
        description: WM_APP_DESCRIPTION,
    },
];

/// Resolve a code to its name and description. Never fails.
pub fn lookup(code: u32) -> CodeInfo {
    if let Some(range) = RESERVED_RANGES.iter().find(|r| r.contains(code)) {
        return range.info_for(code);
    }

    match table::find(code) {
        Some(e) => CodeInfo::borrowed(e.name, e.description),
        None => CodeInfo::unknown(),
    }
}

/// Symbolic name of a code.
pub fn name(code: u32) -> Cow<'static, str> {
    lookup(code).name
}

/// Human-readable description of a code.
pub fn description(code: u32) -> Cow<'static, str> {
    lookup(code).description
}

/// Reverse lookup against the static table, ignoring ASCII case.
///
/// Synthesized range names such as `"WM_USER + 0x50"` are not searchable.
pub fn code_for_name(name: &str) -> Option<u32> {
    MESSAGE_TABLE
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .map(|e| e.code)
}

/// Iterate the static table as `(code, info)` pairs in ascending order.
pub fn known_codes() -> impl Iterator<Item = (u32, CodeInfo)> {
    MESSAGE_TABLE
        .iter()
        .map(|e| (e.code, CodeInfo::borrowed(e.name, e.description)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table_entry() {
        let info = lookup(0x0100);
        assert_eq!(info.name, "WM_KEYDOWN");
        assert_eq!(info.description, "Sent when a key is pressed.");
    }

    #[test]
    fn test_range_offset_is_uppercase_hex_without_padding() {
        assert_eq!(name(0x04AB), "WM_USER + 0xAB");
        assert_eq!(name(0x8001), "WM_APP + 0x1");
    }

    #[test]
    fn test_range_upper_bounds_are_exclusive() {
        assert_eq!(name(WM_USER_END - 1), "WM_USER + 0x7BFF");
        assert_eq!(name(WM_APP_END - 1), "WM_APP + 0x3FFF");
        assert_eq!(name(WM_APP_END), UNKNOWN_NAME);
    }

    #[test]
    fn test_range_starts_resolve_through_range_rule() {
        assert_eq!(name(WM_USER_START), "WM_USER + 0x0");
        assert_eq!(name(WM_APP_START), "WM_APP + 0x0");
        assert_eq!(description(WM_APP_START), WM_APP_DESCRIPTION);
    }

    #[test]
    fn test_unknown_fallback() {
        let info = lookup(0x0004);
        assert!(info.is_unknown());
        assert_eq!(info, CodeInfo::unknown());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            lookup(0x0101).to_string(),
            "WM_KEYUP: Sent when a key is released."
        );
    }

    #[test]
    fn test_table_names_are_borrowed() {
        assert!(matches!(lookup(0x0200).name, Cow::Borrowed(_)));
        assert!(matches!(lookup(0x0450).name, Cow::Owned(_)));
    }

    #[test]
    fn test_known_codes_matches_table() {
        let all: Vec<_> = known_codes().collect();
        assert_eq!(all.len(), MESSAGE_TABLE.len());
        assert_eq!(all[0].0, 0x0000);
        assert_eq!(all[0].1.name, "WM_NULL");
    }
}
