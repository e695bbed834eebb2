//! Parsing for scancode wiring files.
//!
//! This module turns the hand-written scancode list into the pin
//! connection graph consumed by the partitioner and header generator.

pub mod scancodes;

// Re-export commonly used functions
pub use scancodes::{parse_scancode_file, parse_scancodes_str, ParsedScancodes};
