//! Platform-specific host bridges.
//!
//! Everything outside this module is platform-independent and testable on
//! any OS. Only Windows has a bridge; elsewhere the host source is driven
//! directly through [`crate::source::route`].

#[cfg(target_os = "windows")]
pub mod windows;
