//! Domain constants.
//!
//! Pure data with no FFI dependencies. The message table itself lives in
//! [`crate::codes`]; this module only holds the numbers and strings the
//! rest of the crate agrees on.

pub mod constants;

pub use constants::*;
