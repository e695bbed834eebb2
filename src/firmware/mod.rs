//! Matrix header generation.
//!
//! This module validates an inferred scan matrix and renders it as the
//! `keymap.h` header compiled into the Teensy firmware.

pub mod generator;
pub mod validator;

// Re-export firmware types
pub use generator::{write_keymap_h, KeymapGenerator};
pub use validator::{find_gaps, MatrixValidator, ValidationReport};
